//! Headless password field with a show/hide toggle and strength label.
//!
//! [`PasswordField`] owns the password text and decides what the host view
//! should render. Every input event returns a list of [`FieldEffect`]s
//! (mask the text, swap the toggle icon, fade a strength label in or out)
//! which the host applies with its own widgets and animation engine.
//!
//! Strength comes from a pluggable [`StrengthValidator`]; fields start with
//! no validator and no label. The built-in [`DefaultValidator`] counts
//! four rules: mixed case, a digit, punctuation and at least 8 characters.
//! The score is clamped to the size of the message/color [`StrengthTable`].
//!
//! # Features
//!
//! - `async` (default): Enables debounced background evaluation with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Custom path to the blacklist file used by
//!   [`Blacklist::load`] (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_field::{FieldEffect, PasswordField, ValidatorMode, Visibility};
//!
//! let mut field = PasswordField::default().with_validator(ValidatorMode::Default);
//!
//! for effect in field.set_text("MyP@ssw0rd") {
//!     if let FieldEffect::ShowLabel { message, color, .. } = effect {
//!         println!("{message} ({color})");
//!     }
//! }
//!
//! field.toggle_visibility();
//! assert_eq!(field.visibility(), Visibility::Visible);
//!
//! field.set_text("");
//! assert_eq!(field.visibility(), Visibility::Obscured);
//! ```

mod animation;
mod blacklist;
mod config;
mod evaluator;
mod field;
mod sections;
mod table;

pub use animation::{AnimationKind, LabelAnimation, LabelAnimations};
pub use blacklist::{Blacklist, BlacklistError, BlacklistValidator, get_blacklist_path};
pub use config::{
    AnimationConfig, ConfigError, DEFAULT_CONFIG_PATH, FieldConfig, IconConfig, ValidatorKind,
};
pub use evaluator::{
    DefaultValidator, Evaluation, MAX_SCORE, StrengthValidator, ValidatorMode,
    evaluate_password_strength,
};
pub use field::{FieldDimensions, FieldEffect, PasswordField, ToggleIcons, Visibility};
pub use table::{Color, ColorError, DEFAULT_COLORS, DEFAULT_MESSAGES, StrengthTable, TableError};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_strength_tx};
