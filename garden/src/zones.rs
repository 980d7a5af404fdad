//! Garden map zone descriptors.
//!
//! Zones are fixed when the catalog is built and only ever queried by key.
//! The detail markup is produced here so the browser layer can drop it into
//! the shared detail region verbatim.

#[cfg(test)]
#[path = "zones_test.rs"]
mod zones_test;

use std::collections::HashMap;

/// Descriptive metadata for one named region of the garden map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Zone {
    pub title: &'static str,
    pub description: &'static str,
    /// Display order is preserved when rendered.
    pub features: &'static [&'static str],
    pub hours: &'static str,
}

impl Zone {
    /// Render the zone as the inner markup of the detail region.
    #[must_use]
    pub fn detail_html(&self) -> String {
        let mut items = String::new();
        for feature in self.features {
            items.push_str(&format!("<li>{}</li>", escape_html(feature)));
        }
        format!(
            "<h4>{title}</h4>\
             <p>{description}</p>\
             <div class=\"zone-features\"><h6>Features:</h6><ul>{items}</ul></div>\
             <div class=\"zone-hours\"><strong>Hours:</strong> {hours}</div>",
            title = escape_html(self.title),
            description = escape_html(self.description),
            hours = escape_html(self.hours),
        )
    }
}

/// Immutable lookup table from zone key (`data-zone` value) to [`Zone`].
#[derive(Clone, Debug, Default)]
pub struct ZoneCatalog {
    zones: HashMap<&'static str, Zone>,
}

impl ZoneCatalog {
    /// Build a catalog from `(key, zone)` pairs. Later duplicates win.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (&'static str, Zone)>) -> Self {
        Self { zones: entries.into_iter().collect() }
    }

    /// The eight zones shown on the Green Haven map.
    #[must_use]
    pub fn green_haven() -> Self {
        Self::from_entries([
            (
                "entrance",
                Zone {
                    title: "Main Entrance",
                    description: "Welcome to Green Haven! Our visitor center offers maps, information, and a beautiful gift shop with botanical treasures.",
                    features: &["Visitor Center", "Gift Shop", "Information Desk", "Restrooms"],
                    hours: "9:00 AM - 6:00 PM",
                },
            ),
            (
                "rose",
                Zone {
                    title: "Rose Garden",
                    description: "Our crown jewel featuring over 200 rose varieties from around the world. Peak bloom season is June through October.",
                    features: &["Heritage Roses", "Modern Hybrids", "Climbing Roses", "Fragrance Garden"],
                    hours: "9:00 AM - 6:00 PM",
                },
            ),
            (
                "japanese",
                Zone {
                    title: "Japanese Garden",
                    description: "A tranquil landscape designed in traditional Japanese style featuring a koi pond, tea house, and zen garden.",
                    features: &["Tea House", "Koi Pond", "Zen Garden", "Maple Collection"],
                    hours: "9:00 AM - 5:00 PM",
                },
            ),
            (
                "tropical",
                Zone {
                    title: "Tropical Conservatory",
                    description: "Year-round tropical paradise with exotic plants, waterfalls, and butterflies in our climate-controlled glasshouse.",
                    features: &["Exotic Plants", "Waterfall", "Butterfly Exhibit", "Humid Environment"],
                    hours: "10:00 AM - 4:00 PM",
                },
            ),
            (
                "woodland",
                Zone {
                    title: "Woodland Trail",
                    description: "Native forest ecosystem with mature trees, wildlife habitats, and peaceful walking paths through natural woodland.",
                    features: &["Native Trees", "Wildlife Viewing", "Walking Trails", "Educational Signs"],
                    hours: "Dawn to Dusk",
                },
            ),
            (
                "herb",
                Zone {
                    title: "Herb Garden",
                    description: "Fragrant collection of medicinal and culinary herbs arranged by use and origin, with demonstrations and workshops.",
                    features: &["Medicinal Herbs", "Culinary Herbs", "Demonstration Area", "Sensory Garden"],
                    hours: "9:00 AM - 6:00 PM",
                },
            ),
            (
                "children",
                Zone {
                    title: "Children's Garden",
                    description: "Interactive learning space designed for young explorers with hands-on activities, play areas, and educational programs.",
                    features: &["Play Area", "Learning Activities", "Story Circle", "Interactive Exhibits"],
                    hours: "10:00 AM - 5:00 PM",
                },
            ),
            (
                "cafe",
                Zone {
                    title: "Garden Caf\u{e9}",
                    description: "Relaxing dining spot with garden views, serving fresh lunches, snacks, and beverages made with local ingredients.",
                    features: &["Indoor Seating", "Patio Dining", "Local Menu", "Garden Views"],
                    hours: "11:00 AM - 4:00 PM",
                },
            ),
        ])
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Zone> {
        self.zones.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Zone keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = self.zones.keys().copied().collect::<Vec<_>>();
        keys.sort_unstable();
        keys
    }
}

/// Escape text for inclusion in element content or a double-quoted attribute.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
