/// Read-only view on an element as seen by the selector matcher.
pub trait ElementDataType {
    /// Normalized (lowercase) tag name
    fn name(&self) -> &str;

    /// Value of the given attribute, if present
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Returns true when the whitespace-separated `class` attribute contains the given class
    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Value of the `id` attribute, if present
    fn id(&self) -> Option<&str> {
        self.attribute("id")
    }
}
