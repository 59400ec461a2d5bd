//! Naming rules for scaffolded feature modules
//!
//! The feature name typed on the command line is used in two forms: a
//! kebab-case feature name for directories, file names, and routes, and a
//! class name for the generated TypeScript symbols. Both derivations are
//! pure string transforms with no filesystem contact.

/// Name derivations for feature module generation
pub struct NameHelpers;

impl NameHelpers {
    /// Derive the kebab-case feature name used for directories and files.
    ///
    /// Inserts a hyphen wherever a lowercase letter or digit is immediately
    /// followed by an uppercase letter, in a single left-to-right pass, then
    /// lowercases the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nestmod::scaffold::naming::NameHelpers;
    /// assert_eq!(NameHelpers::feature_name("UserGroup"), "user-group");
    /// assert_eq!(NameHelpers::feature_name("product"), "product");
    /// assert_eq!(NameHelpers::feature_name("OrderItem2"), "order-item2");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the boundary pattern fails to compile.
    ///
    /// # Note
    ///
    /// Runs of capitals are not split as acronyms: `HTTPServer` becomes
    /// `httpserver`, not `http-server`. This is acceptable for module
    /// scaffolding as feature names are typically single words or simple
    /// camel case.
    #[must_use]
    pub fn feature_name(input: &str) -> String {
        let boundary = regex::Regex::new(r"([a-z0-9])([A-Z])").expect("Invalid regex");
        boundary.replace_all(input, "$1-$2").to_lowercase()
    }

    /// Derive the class name used for generated TypeScript symbols.
    ///
    /// Uppercases the first character and keeps the rest of the input as
    /// typed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nestmod::scaffold::naming::NameHelpers;
    /// assert_eq!(NameHelpers::class_name("product"), "Product");
    /// assert_eq!(NameHelpers::class_name("UserLog"), "UserLog");
    /// ```
    ///
    /// # Note
    ///
    /// Interior casing is preserved, so `usergroup` becomes `Usergroup`, not
    /// `UserGroup`. Picking a well-cased feature name is the caller's job.
    #[must_use]
    pub fn class_name(input: &str) -> String {
        let mut chars = input.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}
