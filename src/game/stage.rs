//! The tutorial programs, each adding one feature to the one before.

/// Which parts of the scene a stage builds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Features {
    pub background: bool,
    pub color_toggle: bool,
    pub label: bool,
    pub icon: bool,
    pub sprite: bool,
    pub audio: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Stage {
    /// Shows an empty window for a few seconds, then exits.
    OpenWindow,
    /// An empty window that closes on Escape or the close button.
    CloseWindow,
    /// Adds the background image.
    Background,
    /// Space picks a random draw colour.
    ChangingColors,
    /// Adds the bouncing label and the window icon.
    MovingText,
    /// Adds the keyboard sprite, sound effects and music.
    SoundEffects,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::OpenWindow,
        Stage::CloseWindow,
        Stage::Background,
        Stage::ChangingColors,
        Stage::MovingText,
        Stage::SoundEffects,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Stage::OpenWindow => "Open Window",
            Stage::CloseWindow => "Close Window",
            Stage::Background => "Background",
            Stage::ChangingColors => "Changing Colors",
            Stage::MovingText => "Moving Text and Icon",
            Stage::SoundEffects => "Sound Effects and Music",
        }
    }

    /// `OpenWindow` presents one frame and waits; every other stage loops.
    pub fn runs_loop(self) -> bool {
        self != Stage::OpenWindow
    }

    pub fn features(self) -> Features {
        let at_least = |stage: Stage| self as u8 >= stage as u8;
        Features {
            background: at_least(Stage::Background),
            color_toggle: at_least(Stage::ChangingColors),
            label: at_least(Stage::MovingText),
            icon: at_least(Stage::MovingText),
            sprite: at_least(Stage::SoundEffects),
            audio: at_least(Stage::SoundEffects),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_stage_keeps_earlier_features() {
        let count = |f: Features| {
            [f.background, f.color_toggle, f.label, f.icon, f.sprite, f.audio]
                .into_iter()
                .filter(|&on| on)
                .count()
        };
        for pair in Stage::ALL.windows(2) {
            let (before, after) = (pair[0].features(), pair[1].features());
            assert!(count(after) >= count(before), "{:?} -> {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn first_stages_are_bare() {
        let bare = Stage::CloseWindow.features();
        assert!(!bare.background && !bare.color_toggle && !bare.label);
        assert_eq!(Stage::OpenWindow.features(), bare);
    }

    #[test]
    fn only_last_stage_has_sprite_and_audio() {
        for stage in Stage::ALL {
            let features = stage.features();
            let last = stage == Stage::SoundEffects;
            assert_eq!(features.sprite, last);
            assert_eq!(features.audio, last);
        }
    }

    #[test]
    fn moving_text_adds_label_and_icon() {
        let features = Stage::MovingText.features();
        assert!(features.background && features.color_toggle && features.label && features.icon);
        assert!(!Stage::ChangingColors.features().label);
    }

    #[test]
    fn only_open_window_skips_the_loop() {
        assert!(!Stage::OpenWindow.runs_loop());
        assert!(Stage::ALL[1..].iter().all(|s| s.runs_loop()));
    }
}
