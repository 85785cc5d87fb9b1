// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for patients and clinicians.
//
// Each `MedlensError` variant gets a short message and a next step the user
// can act on. The CLI prints these instead of the raw error chain.

use crate::error::MedlensError;

/// How an error should be presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Worth trying again as-is.
    Transient,
    /// The user must change something (file, setting) first.
    ActionRequired,
    /// Cannot be fixed by retrying or user action.
    Permanent,
}

/// What the user sees when a command fails.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-line summary.
    pub message: String,
    /// Next step to try.
    pub suggestion: String,
    /// Whether retrying unchanged could succeed.
    pub retriable: bool,
    pub class: ErrorClass,
}

/// Convert a `MedlensError` into a `HumanError`.
pub fn humanize_error(err: &MedlensError) -> HumanError {
    match err {
        MedlensError::InvalidBuffer(_) => HumanError {
            message: "The picture data is incomplete.".into(),
            suggestion: "Capture or upload the image again.".into(),
            retriable: false,
            class: ErrorClass::Permanent,
        },

        MedlensError::Allocation { .. } => HumanError {
            message: "This picture is too large to process.".into(),
            suggestion: "Close other apps, or use a smaller image.".into(),
            retriable: true,
            class: ErrorClass::Transient,
        },

        MedlensError::ImageError(_) => HumanError {
            message: "This image couldn't be read or written.".into(),
            suggestion: "Check that the file is a JPEG or PNG and isn't damaged, then try again.".into(),
            retriable: false,
            class: ErrorClass::Permanent,
        },

        MedlensError::ModelNotLoaded => HumanError {
            message: "Image analysis isn't ready yet.".into(),
            suggestion: "Wait for the analysis model to finish loading, then try again.".into(),
            retriable: true,
            class: ErrorClass::Transient,
        },

        MedlensError::Analysis(_) => HumanError {
            message: "We couldn't analyse this image.".into(),
            suggestion: "Take the photo again in good lighting, with the area in focus.".into(),
            retriable: true,
            class: ErrorClass::ActionRequired,
        },

        MedlensError::Config(detail) => HumanError {
            message: "A setting has an invalid value.".into(),
            suggestion: format!("Fix the setting or reset the configuration. ({detail})"),
            retriable: false,
            class: ErrorClass::ActionRequired,
        },

        MedlensError::Io(io) => match io.kind() {
            std::io::ErrorKind::NotFound => HumanError {
                message: "That file doesn't exist.".into(),
                suggestion: "Check the file name and location, then try again.".into(),
                retriable: false,
                class: ErrorClass::ActionRequired,
            },
            std::io::ErrorKind::PermissionDenied => HumanError {
                message: "We don't have permission to use that file.".into(),
                suggestion: "Choose a different folder, or check the file's permissions.".into(),
                retriable: false,
                class: ErrorClass::ActionRequired,
            },
            _ => HumanError {
                message: "Reading or writing a file failed.".into(),
                suggestion: format!("Make sure there is free disk space, then try again. ({io})"),
                retriable: true,
                class: ErrorClass::Transient,
            },
        },

        MedlensError::Serialization(_) => HumanError {
            message: "A saved file is damaged.".into(),
            suggestion: "Reset the configuration to its defaults.".into(),
            retriable: false,
            class: ErrorClass::ActionRequired,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_action_required() {
        let err = MedlensError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let human = humanize_error(&err);
        assert_eq!(human.class, ErrorClass::ActionRequired);
        assert!(!human.retriable);
    }

    #[test]
    fn model_not_loaded_is_transient() {
        let human = humanize_error(&MedlensError::ModelNotLoaded);
        assert_eq!(human.class, ErrorClass::Transient);
        assert!(human.retriable);
    }

    #[test]
    fn bad_buffer_is_permanent() {
        let human = humanize_error(&MedlensError::InvalidBuffer("length 7".into()));
        assert_eq!(human.class, ErrorClass::Permanent);
    }

    #[test]
    fn config_detail_is_surfaced() {
        let human = humanize_error(&MedlensError::Config("contrast is NaN".into()));
        assert!(human.suggestion.contains("contrast is NaN"));
    }
}
