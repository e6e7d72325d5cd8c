use std::collections::HashMap;
use tinybrowser_shared::errors::Error;
use tinybrowser_shared::traits::ElementDataType;
use tinybrowser_shared::types::Result;

/// Data structure for element nodes
#[derive(Debug, Clone, PartialEq)]
pub struct ElementData {
    /// Name of the element (always lowercase)
    pub(crate) name: String,
    /// Element's attributes, keyed by lowercase attribute name
    attributes: HashMap<String, String>,
}

impl ElementData {
    /// Creates a new element with the given tag name. The name is normalized to lowercase, a
    /// blank name is rejected.
    pub fn new(name: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "tag name cannot be blank".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_lowercase(),
            attributes: HashMap::new(),
        })
    }

    /// The `html` element used as fallback root
    pub(crate) fn html() -> Self {
        Self {
            name: "html".to_string(),
            attributes: HashMap::new(),
        }
    }

    /// Creates a new element with the given attributes already set
    pub fn with_attributes(name: &str, attributes: &HashMap<String, String>) -> Result<Self> {
        let mut data = Self::new(name)?;
        for (key, value) in attributes {
            data.set_attribute(key, value)?;
        }

        Ok(data)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets (or overwrites) an attribute. Attribute names are stored in lowercase.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "attribute name cannot be blank".to_string(),
            ));
        }

        self.attributes.insert(name.to_lowercase(), value.to_string());
        Ok(())
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    /// Attributes sorted by name, for output that must not depend on hash order
    pub fn sorted_attributes(&self) -> Vec<(&str, &str)> {
        let mut attributes: Vec<(&str, &str)> = self
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        attributes.sort_unstable();
        attributes
    }

    /// Iterates over the whitespace separated class names of the element
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attribute("class")
            .unwrap_or_default()
            .split_whitespace()
    }
}

impl ElementDataType for ElementData {
    fn name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.get_attribute(name)
    }
}
