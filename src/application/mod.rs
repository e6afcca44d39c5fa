// SPDX-License-Identifier: MPL-2.0
//! Application layer - orchestration over domain data.
//!
//! - [`query`]: Navigation over the fetched story list
//!
//! # Dependency Rule
//!
//! - Application layer depends on the domain layer
//! - Presentation (`ui`, `app`) uses application layer services
//!
//! # Example
//!
//! ```
//! use iced_stories::application::query::{NavigationOutcome, StoryNavigator};
//!
//! let mut navigator = StoryNavigator::new();
//! assert_eq!(navigator.next(), NavigationOutcome::Inactive);
//! ```

pub mod query;
