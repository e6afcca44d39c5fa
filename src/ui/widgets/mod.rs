// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod story_progress;

pub use animated_spinner::AnimatedSpinner;
pub use story_progress::StoryProgress;
