//! Password field controller.
//!
//! Owns the text, the show/hide state and the last label shown, and turns
//! input events into [`FieldEffect`]s for the host view to apply.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::animation::{LabelAnimation, LabelAnimations};
use crate::evaluator::{ValidatorMode, evaluate_password_strength};
use crate::table::{Color, StrengthTable};

/// How the password text is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Obscured,
    Visible,
}

impl Visibility {
    pub fn toggle(self) -> Self {
        match self {
            Visibility::Obscured => Visibility::Visible,
            Visibility::Visible => Visibility::Obscured,
        }
    }

    pub fn is_masked(self) -> bool {
        self == Visibility::Obscured
    }
}

/// Icon resource names for the toggle button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleIcons {
    /// Shown while obscured; tapping reveals the text.
    pub show: String,
    /// Shown while visible; tapping hides the text.
    pub hide: String,
}

impl ToggleIcons {
    fn for_state(&self, visibility: Visibility) -> &str {
        match visibility {
            Visibility::Obscured => &self.show,
            Visibility::Visible => &self.hide,
        }
    }
}

impl Default for ToggleIcons {
    fn default() -> Self {
        Self {
            show: "ic_visibility".to_string(),
            hide: "ic_visibility_off".to_string(),
        }
    }
}

/// Toggle button and label sizes, in density-independent pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldDimensions {
    pub min_button_width: f32,
    pub max_button_width: f32,
    pub min_button_height: f32,
    pub max_button_height: f32,
    /// Horizontal padding on both sides of the strength label.
    pub message_side_padding: f32,
    /// Drawable name for the toggle background, host default if unset.
    pub button_background: Option<String>,
}

const BUTTON_SIDE: f32 = 48.0;
const BUTTON_MARGIN: f32 = 10.0;

impl Default for FieldDimensions {
    fn default() -> Self {
        Self {
            min_button_width: BUTTON_SIDE,
            max_button_width: BUTTON_SIDE,
            min_button_height: BUTTON_SIDE,
            max_button_height: BUTTON_SIDE,
            message_side_padding: BUTTON_SIDE + BUTTON_MARGIN,
            button_background: None,
        }
    }
}

/// Instruction for the host view.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEffect {
    SetDimensions(FieldDimensions),
    SetMasked(bool),
    SetToggleIcon(String),
    SetToggleVisible(bool),
    HideLabel {
        level: usize,
        animation: LabelAnimation,
    },
    ShowLabel {
        level: usize,
        message: String,
        color: Color,
        animation: LabelAnimation,
    },
}

#[derive(Debug)]
pub struct PasswordField {
    text: SecretString,
    visibility: Visibility,
    validator: ValidatorMode,
    table: StrengthTable,
    icons: ToggleIcons,
    dimensions: FieldDimensions,
    animations: LabelAnimations,
    shown_level: Option<usize>,
}

impl Default for PasswordField {
    fn default() -> Self {
        Self::new(StrengthTable::default())
    }
}

impl PasswordField {
    pub fn new(table: StrengthTable) -> Self {
        Self {
            text: SecretString::new(String::new().into()),
            visibility: Visibility::Obscured,
            validator: ValidatorMode::None,
            table,
            icons: ToggleIcons::default(),
            dimensions: FieldDimensions::default(),
            animations: LabelAnimations::default(),
            shown_level: None,
        }
    }

    pub fn with_validator(mut self, validator: ValidatorMode) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_icons(mut self, icons: ToggleIcons) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_dimensions(mut self, dimensions: FieldDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_animations(mut self, animations: LabelAnimations) -> Self {
        self.animations = animations;
        self
    }

    pub fn password(&self) -> &SecretString {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.expose_secret().is_empty()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Level of the label currently on screen.
    pub fn shown_level(&self) -> Option<usize> {
        self.shown_level
    }

    pub fn table(&self) -> &StrengthTable {
        &self.table
    }

    pub fn validator(&self) -> &ValidatorMode {
        &self.validator
    }

    pub fn dimensions(&self) -> &FieldDimensions {
        &self.dimensions
    }

    /// Effects that bring a freshly created view in line with this field.
    pub fn initial_effects(&self) -> Vec<FieldEffect> {
        let mut effects = vec![
            FieldEffect::SetDimensions(self.dimensions.clone()),
            FieldEffect::SetMasked(self.visibility.is_masked()),
            FieldEffect::SetToggleIcon(self.icons.for_state(self.visibility).to_string()),
            FieldEffect::SetToggleVisible(!self.is_empty()),
        ];
        if let Some(level) = self.shown_level {
            self.push_show(level, self.animations.enter(), &mut effects);
        }
        effects
    }

    /// Hints for the default rules the current text misses.
    ///
    /// Empty for empty text and whenever the validator is not
    /// [`ValidatorMode::Default`], since other validators score by rules
    /// these hints would not describe.
    pub fn hints(&self) -> Vec<String> {
        if self.is_empty() || !matches!(self.validator, ValidatorMode::Default) {
            return Vec::new();
        }

        #[cfg(feature = "async")]
        let evaluation = evaluate_password_strength(&self.text, None);

        #[cfg(not(feature = "async"))]
        let evaluation = evaluate_password_strength(&self.text);

        evaluation.reasons
    }

    /// Replaces the text and updates masking, toggle and label.
    pub fn set_text(&mut self, text: impl Into<String>) -> Vec<FieldEffect> {
        let was_empty = self.is_empty();
        let text: String = text.into();
        self.text = SecretString::new(text.into_boxed_str());
        let mut effects = Vec::new();

        if self.is_empty() {
            if self.visibility == Visibility::Visible {
                self.set_visibility(Visibility::Obscured, &mut effects);
            }
            if !was_empty {
                effects.push(FieldEffect::SetToggleVisible(false));
            }
            self.hide_label(&mut effects);
            return effects;
        }

        if was_empty {
            effects.push(FieldEffect::SetToggleVisible(true));
        }
        self.refresh_label(&mut effects);
        effects
    }

    /// Flips between obscured and visible. Ignored while the text is empty.
    pub fn toggle_visibility(&mut self) -> Vec<FieldEffect> {
        let mut effects = Vec::new();
        if self.is_empty() {
            return effects;
        }
        self.set_visibility(self.visibility.toggle(), &mut effects);
        effects
    }

    pub fn set_validator(&mut self, validator: ValidatorMode) -> Vec<FieldEffect> {
        self.validator = validator;
        self.relabel()
    }

    pub fn set_table(&mut self, table: StrengthTable) -> Vec<FieldEffect> {
        self.table = table;
        self.relabel()
    }

    /// Re-shows the label even when the level is unchanged, since the
    /// message or color behind it may have changed.
    fn relabel(&mut self) -> Vec<FieldEffect> {
        let mut effects = Vec::new();
        let score = if self.is_empty() {
            None
        } else {
            self.validator.score(&self.text)
        };
        match score {
            Some(score) => self.replace_label(self.table.level_for(score), &mut effects),
            None => self.hide_label(&mut effects),
        }
        effects
    }

    fn set_visibility(&mut self, visibility: Visibility, effects: &mut Vec<FieldEffect>) {
        #[cfg(feature = "tracing")]
        tracing::debug!("password visibility {:?} -> {:?}", self.visibility, visibility);

        self.visibility = visibility;
        effects.push(FieldEffect::SetMasked(visibility.is_masked()));
        effects.push(FieldEffect::SetToggleIcon(
            self.icons.for_state(visibility).to_string(),
        ));
    }

    fn refresh_label(&mut self, effects: &mut Vec<FieldEffect>) {
        let Some(score) = self.validator.score(&self.text) else {
            return;
        };
        let level = self.table.level_for(score);
        if self.shown_level == Some(level) {
            return;
        }

        self.replace_label(level, effects);
    }

    fn replace_label(&mut self, level: usize, effects: &mut Vec<FieldEffect>) {
        #[cfg(feature = "tracing")]
        tracing::debug!("strength level {:?} -> {}", self.shown_level, level);

        let animation = if self.shown_level.is_some() {
            self.animations.enter_after_exit()
        } else {
            self.animations.enter()
        };
        self.hide_label(effects);
        self.push_show(level, animation, effects);
        self.shown_level = Some(level);
    }

    fn hide_label(&mut self, effects: &mut Vec<FieldEffect>) {
        if let Some(level) = self.shown_level.take() {
            effects.push(FieldEffect::HideLabel {
                level,
                animation: self.animations.exit(),
            });
        }
    }

    fn push_show(&self, level: usize, animation: LabelAnimation, effects: &mut Vec<FieldEffect>) {
        if let Some((message, color)) = self.table.entry(level) {
            effects.push(FieldEffect::ShowLabel {
                level,
                message: message.to_string(),
                color,
                animation,
            });
        }
    }
}
