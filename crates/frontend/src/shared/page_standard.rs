//! Page category constants.
//!
//! Every page declares an HTML `id` of the form `{module}--{category}`
//! (e.g. `"a001_medicine--list"`) and a `data-page-category` taken from the
//! constants below, so a DOM id leads straight to its source directory.

/// Table of records with filters and sorting.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Use-case page that performs an action (uploads, integrations).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Account, settings and help pages.
pub const PAGE_CAT_SYSTEM: &str = "system";
