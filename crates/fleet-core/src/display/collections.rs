//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper prints its items one after another using the item's own
//! `Display`, or a "No ... found." line when empty.

use std::{fmt, ops::Index};

use crate::models::{Maintenance, Notification, Tire, Trailer, Trip, User, Vehicle};

macro_rules! collection {
    ($(#[$meta:meta])* $name:ident, $item:ty, $empty:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name(pub Vec<$item>);

        impl $name {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Reference to the item at `index`.
            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            /// Iterator over the items.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self(items)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    writeln!(f, $empty)
                } else {
                    for item in &self.0 {
                        write!(f, "{item}")?;
                    }
                    Ok(())
                }
            }
        }
    };
}

collection!(
    /// Vehicles, e.g. the result of an availability query.
    Vehicles,
    Vehicle,
    "No vehicles found."
);
collection!(
    /// Trailers, e.g. the result of an availability query.
    Trailers,
    Trailer,
    "No trailers found."
);
collection!(
    /// Users; drivers when returned by an availability query.
    Users,
    User,
    "No users found."
);
collection!(Trips, Trip, "No trips found.");
collection!(Tires, Tire, "No tires found.");
collection!(MaintenanceLog, Maintenance, "No maintenance records found.");
collection!(Notifications, Notification, "No notifications found.");
