//! Registry-wide integration checks for the colour map catalogue.

use prismatic_core::ColorSpace;
use prismatic_maps::{ColorMap, MapMode, MapType};

#[test]
fn names_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for map in ColorMap::all() {
        assert!(seen.insert(map.name()), "duplicate map name {}", map.name());
    }
}

#[test]
fn every_brewer_family_is_complete() {
    // every scheme publishes sizes from 3 up to its family maximum
    let families = [
        ("Accent", 8),
        ("Blues", 9),
        ("BrBG", 11),
        ("Dark2", 8),
        ("Paired", 12),
        ("PuOr", 11),
        ("RdBu", 11),
        ("Set3", 12),
        ("Spectral", 11),
        ("YlGnBu", 9),
        ("YlOrRd", 8),
    ];
    for (family, max) in families {
        for size in 3..=max {
            let name = format!("{family}{size}");
            let map = ColorMap::by_name(&name)
                .unwrap_or_else(|| panic!("missing {name}"));
            assert_eq!(map.mode(), MapMode::Discrete);
            assert_eq!(map.palette().unwrap().len(), size);
        }
    }
}

#[test]
fn diverging_maps_are_tagged_diverging() {
    for family in ["BrBG", "PiYG", "PRGn", "PuOr", "RdBu", "RdGy", "RdYlBu", "RdYlGn", "Spectral"] {
        let map = ColorMap::by_name(&format!("{family}5")).unwrap();
        assert_eq!(map.map_type(), MapType::Diverging, "{family}");
    }
}

#[test]
fn visualise_works_across_the_registry() {
    for map in ColorMap::all() {
        let img = map.visualise(16, 2);
        assert_eq!(img.space(), ColorSpace::Rgb);
        assert_eq!((img.width(), img.height()), (16, 2));
        assert_eq!(img.pixel(0, 0).unwrap(), map.apply(0.0).to_vec());
    }
}

#[test]
fn generate_colors_spans_the_whole_map() {
    for map in ColorMap::all() {
        let colors = map.generate_colors(8);
        assert_eq!(colors.len(), 8);
        assert_eq!(colors[0], map.apply(0.0));
        assert_eq!(colors[7], map.apply(1.0));
    }
}
