// crates/destsearch-core/src/model/entity.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of a [`SearchEntity`].
///
/// A closed tag set. It drives icon/label selection and kind filtering, never
/// ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Administrative region of a country (US state, Canadian province, ...).
    #[serde(alias = "state")]
    Region,
    Country,
    City,
    /// Any other tagged place (islands, territories, resort areas).
    Place,
}

/// Icon and label shown next to a suggestion row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindStyle {
    pub icon: &'static str,
    pub label: &'static str,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Region,
        EntityKind::Country,
        EntityKind::City,
        EntityKind::Place,
    ];

    /// The `kind -> {icon, label}` table.
    pub const fn style(self) -> KindStyle {
        match self {
            EntityKind::Region => KindStyle { icon: "map", label: "State" },
            EntityKind::Country => KindStyle { icon: "globe", label: "Country" },
            EntityKind::City => KindStyle { icon: "building", label: "City" },
            EntityKind::Place => KindStyle { icon: "pin", label: "Place" },
        }
    }

    /// Stable lowercase tag, as used in catalogs and display keys.
    pub const fn as_str(self) -> &'static str {
        match self {
            EntityKind::Region => "region",
            EntityKind::Country => "country",
            EntityKind::City => "city",
            EntityKind::Place => "place",
        }
    }

    /// Parse a tag case-insensitively. `"state"` is accepted for regions.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("state") || s.eq_ignore_ascii_case("region") {
            Some(EntityKind::Region)
        } else {
            EntityKind::ALL
                .into_iter()
                .find(|k| k.as_str().eq_ignore_ascii_case(s))
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-only legal status label of a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegalStatus {
    Recreational,
    Medical,
    Decriminalized,
    Illegal,
    Unknown,
}

impl LegalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LegalStatus::Recreational => "Recreational",
            LegalStatus::Medical => "Medical",
            LegalStatus::Decriminalized => "Decriminalized",
            LegalStatus::Illegal => "Illegal",
            LegalStatus::Unknown => "Unknown",
        }
    }

    /// Case-insensitive parse. Labels outside the known set map to `Unknown`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        [
            LegalStatus::Recreational,
            LegalStatus::Medical,
            LegalStatus::Decriminalized,
            LegalStatus::Illegal,
        ]
        .into_iter()
        .find(|st| st.label().eq_ignore_ascii_case(s))
        .unwrap_or(LegalStatus::Unknown)
    }
}

impl fmt::Display for LegalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One searchable destination.
///
/// Entities are immutable once the catalog is built; selecting one only
/// triggers navigation to [`SearchEntity::destination_path`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntity {
    pub name: String,
    pub kind: EntityKind,
    pub legal_status: LegalStatus,
    pub destination_path: String,
    pub region_label: String,
}

impl SearchEntity {
    pub fn new(
        name: impl Into<String>,
        kind: EntityKind,
        legal_status: LegalStatus,
        destination_path: impl Into<String>,
        region_label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            legal_status,
            destination_path: destination_path.into(),
            region_label: region_label.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn destination_path(&self) -> &str {
        &self.destination_path
    }

    pub fn region_label(&self) -> &str {
        &self.region_label
    }

    pub fn style(&self) -> KindStyle {
        self.kind.style()
    }

    /// Composite UI key (`kind:name`). Stable enough for list keying; not
    /// guaranteed globally unique.
    pub fn display_key(&self) -> String {
        format!("{}:{}", self.kind, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parse_accepts_state_alias() {
        assert_eq!(EntityKind::parse("State"), Some(EntityKind::Region));
        assert_eq!(EntityKind::parse("CITY"), Some(EntityKind::City));
        assert_eq!(EntityKind::parse("galaxy"), None);
    }

    #[test]
    fn every_kind_has_a_style() {
        for kind in EntityKind::ALL {
            let style = kind.style();
            assert!(!style.icon.is_empty());
            assert!(!style.label.is_empty());
        }
        assert_eq!(EntityKind::Region.style().label, "State");
    }

    #[test]
    fn unknown_status_labels_do_not_fail() {
        assert_eq!(LegalStatus::parse("medical"), LegalStatus::Medical);
        assert_eq!(LegalStatus::parse("Mixed"), LegalStatus::Unknown);
    }

    #[test]
    fn display_key_combines_kind_and_name() {
        let e = SearchEntity::new(
            "Georgia",
            EntityKind::Country,
            LegalStatus::Decriminalized,
            "/world/georgia",
            "Asia",
        );
        assert_eq!(e.display_key(), "country:Georgia");
    }
}
