// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::CategoryDefinition;
use once_cell::sync::Lazy;

/// Color used for records whose category id is not in the catalog.
pub const FALLBACK_COLOR: &str = "#A0AEC0";

/// Label under which unknown-category amounts are reported.
pub const UNCATEGORIZED: &str = "(uncategorized)";

static BUILTIN: Lazy<Vec<CategoryDefinition>> = Lazy::new(|| {
    fn def(id: &str, name: &str, icon: &str, color: &str) -> CategoryDefinition {
        CategoryDefinition {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
    vec![
        def("food", "Food & Dining", "utensils", "#F687B3"),
        def("transport", "Transportation", "car", "#5A67D8"),
        def("shopping", "Shopping", "shopping-bag", "#68D391"),
        def("entertainment", "Entertainment", "film", "#F6E05E"),
        def("housing", "Housing", "home", "#FC8181"),
        def("utilities", "Utilities", "zap", "#4FD1C5"),
        def("healthcare", "Healthcare", "heart", "#F56565"),
        def("personal", "Personal", "user", "#9F7AEA"),
        def("education", "Education", "book", "#ED8936"),
        def("other", "Other", "more-horizontal", "#A0AEC0"),
    ]
});

/// The built-in category catalog, cloned for injection into a ledger.
pub fn builtin() -> Vec<CategoryDefinition> {
    BUILTIN.clone()
}
