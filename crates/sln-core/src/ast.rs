//! Abstract syntax tree types for Visual Studio solution files.
//!
//! Every value here is created once during a parse pass and never mutated
//! afterwards. A parse yields either one fully-formed [`SolutionFile`] or
//! no document at all.

use std::fmt;

use indexmap::IndexMap;

use crate::types::{Guid, VisualStudioProduct};

/// A complete parsed solution file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionFile {
    /// The two header lines
    pub header: SolutionHeader,
    /// Project declarations in source order
    pub projects: Vec<ProjectDeclaration>,
    /// Global sections keyed by name, insertion order preserved.
    ///
    /// Duplicate section names resolve last-write-wins: the later section
    /// replaces the earlier value but keeps the earlier position.
    pub global_sections: IndexMap<String, GlobalSection>,
}

impl SolutionFile {
    /// Assemble a document from parsed parts, collapsing the section list
    /// into the name-keyed map.
    pub fn new(
        header: SolutionHeader,
        projects: Vec<ProjectDeclaration>,
        sections: Vec<GlobalSection>,
    ) -> Self {
        let mut global_sections = IndexMap::with_capacity(sections.len());
        for section in sections {
            global_sections.insert(section.name.clone(), section);
        }
        Self {
            header,
            projects,
            global_sections,
        }
    }
}

/// The header: format-version line plus the product-name comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionHeader {
    pub format_version: FormatVersion,
    /// Free text after the `#` on the comment line, e.g. "Visual Studio 2012"
    pub product_name: String,
}

impl SolutionHeader {
    /// The Visual Studio product advertised by the comment line.
    pub fn product(&self) -> VisualStudioProduct {
        VisualStudioProduct::from_product_name(&self.product_name)
    }
}

/// File format version, e.g. `12.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatVersion {
    pub major: u32,
    pub minor: u32,
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.major, self.minor)
    }
}

/// One `Project` ... `EndProject` declaration.
///
/// The parser enforces no uniqueness across declarations; duplicate
/// identifiers are a caller concern.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectDeclaration {
    /// Project-type identifier (language/flavor)
    pub type_id: Guid,
    /// Display name
    pub name: String,
    /// Path relative to the solution file
    pub path: String,
    /// Unique identifier of this project
    pub project_id: Guid,
}

/// Whether a section's settings apply before or after project-level
/// processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadSequence {
    PreSolution,
    PostSolution,
}

/// A named section inside the `Global` ... `EndGlobal` block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalSection {
    /// The literal inside the section header's parentheses
    pub name: String,
    pub load_sequence: LoadSequence,
    pub payload: SectionPayload,
}

/// Payload of a global section, selected by section name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionPayload {
    /// `SolutionProperties`: ordered name/value pairs
    Properties(PropertyMap),
    /// `SolutionConfigurationPlatforms` / `ProjectConfigurationPlatforms`.
    /// Kept opaque; a structured decomposition of the configuration and
    /// platform mappings can hang off this variant without touching the
    /// fallback.
    ConfigurationPlatforms(String),
    /// Verbatim capture for section names the grammar does not recognize
    Raw(String),
}

/// A single `name = value` entry inside a properties section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    pub name: String,
    pub value: String,
}

/// Ordered property collection.
///
/// Names follow source order. The grammar does not require names to be
/// unique; duplicates resolve last-write-wins, keeping the position of the
/// first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyMap(pub IndexMap<String, String>);

impl PropertyMap {
    pub fn from_properties(properties: Vec<Property>) -> Self {
        let mut map = IndexMap::with_capacity(properties.len());
        for property in properties {
            map.insert(property.name, property.value);
        }
        PropertyMap(map)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<Property> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        Self::from_properties(iter.into_iter().collect())
    }
}
