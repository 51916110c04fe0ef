// crates/destsearch-core/src/model/convert.rs
use super::catalog::Catalog;
use super::entity::{EntityKind, LegalStatus, SearchEntity};
use super::raw::{CatalogRaw, CityRaw, DestinationRaw, RegionRaw};
use crate::text::slugify;

/// Root segment for derived world destination paths.
const WORLD_ROOT: &str = "/world";

/// **Standard Converter:** Raw -> Catalog.
///
/// Regions map 1:1 in order. Each world record is followed directly by its
/// nested cities. Paths missing from the source are derived from slugs.
pub fn from_raw(raw: CatalogRaw) -> Catalog {
    let regions = raw.regions.into_iter().map(region_entity).collect();

    let mut world = Vec::new();
    for dest in raw.world {
        let (parent, cities) = destination_entity(dest);
        let parent_path = parent.destination_path.clone();
        let parent_name = parent.name.clone();
        let parent_status = parent.legal_status;
        world.push(parent);
        world.extend(
            cities
                .into_iter()
                .map(|c| city_entity(c, &parent_name, &parent_path, parent_status)),
        );
    }

    Catalog { regions, world }
}

fn parse_status(s: Option<&str>) -> Option<LegalStatus> {
    s.map(LegalStatus::parse)
}

fn region_entity(r: RegionRaw) -> SearchEntity {
    let label = r.country.unwrap_or_default();
    let path = r.path.unwrap_or_else(|| {
        let country = slugify(&label);
        if country.is_empty() {
            format!("/{}", slugify(&r.name))
        } else {
            format!("/{}/{}", country, slugify(&r.name))
        }
    });
    SearchEntity {
        legal_status: parse_status(r.status.as_deref()).unwrap_or(LegalStatus::Unknown),
        kind: EntityKind::Region,
        destination_path: path,
        region_label: label,
        name: r.name,
    }
}

fn destination_entity(d: DestinationRaw) -> (SearchEntity, Vec<CityRaw>) {
    // Unrecognised tags are still searchable, as generic places.
    let kind = d
        .kind
        .as_deref()
        .map(|k| EntityKind::parse(k).unwrap_or(EntityKind::Place))
        .unwrap_or(EntityKind::Country);
    let path = d
        .path
        .unwrap_or_else(|| format!("{}/{}", WORLD_ROOT, slugify(&d.name)));
    let entity = SearchEntity {
        legal_status: parse_status(d.status.as_deref()).unwrap_or(LegalStatus::Unknown),
        kind,
        destination_path: path,
        region_label: d.continent.unwrap_or_default(),
        name: d.name,
    };
    (entity, d.cities)
}

fn city_entity(
    c: CityRaw,
    parent_name: &str,
    parent_path: &str,
    parent_status: LegalStatus,
) -> SearchEntity {
    let path = c.path.unwrap_or_else(|| {
        format!("{}/{}", parent_path.trim_end_matches('/'), slugify(&c.name))
    });
    SearchEntity {
        legal_status: parse_status(c.status.as_deref()).unwrap_or(parent_status),
        kind: EntityKind::City,
        destination_path: path,
        region_label: parent_name.to_string(),
        name: c.name,
    }
}

impl Catalog {
    /// Build a catalog from a parsed raw document.
    pub fn from_raw(raw: CatalogRaw) -> Self {
        from_raw(raw)
    }
}
