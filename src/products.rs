//! Static product and option tables.
//!
//! Peripheral data used by the interactive menus and key decode display;
//! the cipher engines never consult these tables.

/// One entry in the product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// 4-digit product code as embedded in Enigma2 keys.
    pub code: &'static str,
    /// Short marketing abbreviation.
    pub abbr: &'static str,
    /// Full product name.
    pub name: &'static str,
}

/// Known products, in menu order.
pub const PRODUCT_TABLE: [Product; 7] = [
    Product {
        code: "3001",
        abbr: "NTs2",
        name: "NetTool Series II",
    },
    Product {
        code: "7001",
        abbr: "LRPro",
        name: "LinkRunner Pro Duo",
    },
    Product {
        code: "6963",
        abbr: "Escope/MSv2",
        name: "EtherScope/MetroScope",
    },
    Product {
        code: "6964",
        abbr: "OneTouch",
        name: "OneTouch AT",
    },
    Product {
        code: "2186",
        abbr: "OptiView",
        name: "OptiView XG",
    },
    Product {
        code: "1890",
        abbr: "ClearSight",
        name: "ClearSight Analyzer",
    },
    Product {
        code: "1895",
        abbr: "iClearSight",
        name: "iClearSight Analyzer",
    },
];

/// Product code used by the LinkRunner Pro shortcut.
pub const LINKRUNNER_PRODUCT_CODE: &str = "7001";

/// Looks up the product name for a 4-digit code.
pub fn product_name(code: &str) -> Option<&'static str> {
    PRODUCT_TABLE
        .iter()
        .find(|product| product.code == code)
        .map(|product| product.name)
}

/// Returns the known `(option code, description)` pairs for a product,
/// sorted by option code. Empty for products without a published list.
pub fn options_for(code: &str) -> &'static [(&'static str, &'static str)] {
    match code {
        "6964" => &[
            ("000", "Registered"),
            ("001", "Wired (Was Copper)"),
            ("002", "Obsolete (was fiber)"),
            ("003", "Wi-Fi"),
            ("004", "Obsolete (was inline)"),
            ("005", "Capture"),
            ("006", "Advanced Tests"),
            ("007", "XGR-to-ATX Upgrade"),
            ("008", "Claimed (Cloud Tools)"),
            ("009", "LatTests (China LAN Tests)"),
            ("064", "XGReflector (Future)"),
            ("065", "Performance Peer (Future)"),
        ],
        "6963" => &[
            ("000", "MetroScope Base, EtherScope LAN"),
            ("001", "MetroScope WLAN, EtherScope WLAN"),
            ("002", "MetroScope Multi, EtherScope ITO"),
            ("003", "MetroScope VoIP, EtherScope Fiber"),
            ("004", "MetroScope LT, EtherScope LT"),
        ],
        "7001" => &[("000", "802.1x"), ("002", "Reports"), ("003", "LAN")],
        "2186" => &[
            ("000", "Wireless Analyzer Option"),
            ("001", "Enables Network Test Ports A-D"),
            ("002", "10Gb Ethernet Analyzer Option"),
            ("003", "LAN / 10Gb Ethernet Analyzer Option"),
            ("004", "NPT - Network Performance Option"),
            ("007", "Everything"),
        ],
        "1890" => &[("000", "Activation Code"), ("007", "All Options")],
        "1895" => &[("000", "Activation Code"), ("003", "All Options")],
        "3001" => &[
            ("003", "Personalization"),
            ("004", "VoIP"),
            ("005", "NetSecure"),
            ("008", "Dicom"),
        ],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_name_lookup() {
        assert_eq!(product_name("6963"), Some("EtherScope/MetroScope"));
        assert_eq!(product_name("0000"), None);
    }

    #[test]
    fn test_every_listed_product_has_options() {
        for product in &PRODUCT_TABLE {
            assert!(
                !options_for(product.code).is_empty(),
                "no options for {}",
                product.code
            );
        }
    }

    #[test]
    fn test_options_are_sorted_and_well_formed() {
        for product in &PRODUCT_TABLE {
            let options = options_for(product.code);
            for window in options.windows(2) {
                assert!(window[0].0 < window[1].0);
            }
            for (code, _) in options {
                assert_eq!(code.len(), 3);
                assert!(code.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn test_unknown_product_has_no_options() {
        assert!(options_for("9999").is_empty());
    }
}
