//! # Sample Inventories
//!
//! Two built-in datasets of period server hardware:
//!
//! - [`standard`]: HP ML350 G4p (Socket 604, DDR2) and Dell R710
//!   (Socket 1366, DDR3) with matching processors, memory, disks and PSUs.
//! - [`extended`]: the standard set plus an IBM x3650 M3, Xeon X5670,
//!   Crucial 8 GB DDR3, an Intel SSD and an IBM 835 W PSU.
//!
//! Each platform's parts list only each other in the compatibility table, so
//! mixing an HP part into a Dell build fails the pairwise check even where no
//! rule forbids it.

use crate::catalog::Catalog;
use crate::compat::CompatibilityTable;
use crate::inventory::Inventory;
use crate::rules::{Rule, RuleSet};
use crate::{Attribute, Component, ComponentType, ConfiguratorError, Price};

type AttrRow<'a> = (&'a str, &'a str, Option<&'a str>);

fn attrs(rows: &[AttrRow<'_>]) -> Vec<Attribute> {
    rows.iter()
        .map(|(name, value, unit)| match unit {
            Some(unit) => Attribute::with_unit(*name, *value, *unit),
            None => Attribute::new(*name, *value),
        })
        .collect()
}

fn table(entries: &[(&str, &[&str])]) -> CompatibilityTable {
    let mut table = CompatibilityTable::new();
    for (id, compatible) in entries {
        table.declare(*id, compatible.iter().copied());
    }
    table
}

fn catalog(components: Vec<Component>) -> Result<Catalog, ConfiguratorError> {
    let mut catalog = Catalog::new();
    for component in components {
        catalog.insert(component)?;
    }
    Ok(catalog)
}

// =============================================================================
// COMPONENTS
// =============================================================================

fn servers() -> Vec<Component> {
    vec![
        Component::new(
            "hp_ml350g4p",
            "HP ProLiant ML350 G4p",
            ComponentType::Server,
            "HP",
            "ML350 G4p",
        )
        .with_attributes(attrs(&[
            ("form_factor", "4U Rack", None),
            ("max_processors", "2", None),
            ("max_memory_slots", "8", None),
            ("max_memory_gb", "32", None),
            ("storage_bays", "6", None),
            ("power_supply_slots", "2", None),
            ("socket_type", "Socket 604", None),
            ("chipset", "Intel E7520", None),
        ]))
        .with_price(Price::from_units(1500))
        .with_description("Entry-level rack server with dual processor support"),
        Component::new(
            "dell_poweredge_r710",
            "Dell PowerEdge R710",
            ComponentType::Server,
            "Dell",
            "R710",
        )
        .with_attributes(attrs(&[
            ("form_factor", "2U Rack", None),
            ("max_processors", "2", None),
            ("max_memory_slots", "18", None),
            ("max_memory_gb", "144", None),
            ("storage_bays", "6", None),
            ("power_supply_slots", "2", None),
            ("socket_type", "Socket 1366", None),
            ("chipset", "Intel 5520", None),
        ]))
        .with_price(Price::from_units(2000))
        .with_description("Mid-range rack server with high memory capacity"),
    ]
}

fn processor(id: &str, name: &str, model: &str, specs: [&str; 5], price: u64) -> Component {
    let [frequency, cores, socket, cache, tdp] = specs;
    Component::new(id, name, ComponentType::Processor, "Intel", model)
        .with_attributes(attrs(&[
            ("frequency", frequency, Some("GHz")),
            ("cores", cores, None),
            ("socket", socket, None),
            ("cache", cache, Some("MB")),
            ("tdp", tdp, Some("W")),
        ]))
        .with_price(Price::from_units(price))
}

fn processors() -> Vec<Component> {
    vec![
        processor(
            "intel_xeon_3_0_604",
            "Intel Xeon 3.0GHz",
            "Xeon 3.0GHz",
            ["3.0", "1", "604", "1", "89"],
            150,
        ),
        processor(
            "intel_xeon_3_2_604",
            "Intel Xeon 3.2GHz",
            "Xeon 3.2GHz",
            ["3.2", "1", "604", "1", "103"],
            200,
        ),
        processor(
            "intel_xeon_e5620",
            "Intel Xeon E5620",
            "E5620",
            ["2.4", "4", "1366", "12", "80"],
            300,
        ),
    ]
}

fn dimm(id: &str, manufacturer: &str, model: &str, specs: [&str; 4], price: u64) -> Component {
    let [capacity, kind, speed, voltage] = specs;
    Component::new(
        id,
        format!("{manufacturer} {model}"),
        ComponentType::Memory,
        manufacturer,
        model,
    )
    .with_attributes(attrs(&[
        ("capacity", capacity, Some("GB")),
        ("type", kind, None),
        ("speed", speed, Some("MHz")),
        ("form_factor", "DIMM", None),
        ("voltage", voltage, Some("V")),
    ]))
    .with_price(Price::from_units(price))
}

fn memory() -> Vec<Component> {
    vec![
        dimm(
            "kingston_1gb_ddr2_400",
            "Kingston",
            "1GB DDR2-400",
            ["1", "DDR2", "400", "1.8"],
            25,
        ),
        dimm(
            "corsair_2gb_ddr2_533",
            "Corsair",
            "2GB DDR2-533",
            ["2", "DDR2", "533", "1.8"],
            45,
        ),
        dimm(
            "samsung_4gb_ddr3_1333",
            "Samsung",
            "4GB DDR3-1333",
            ["4", "DDR3", "1333", "1.5"],
            80,
        ),
    ]
}

fn disks() -> Vec<Component> {
    let disk = |id: &str, manufacturer: &str, model: &str, capacity: [&str; 2], cache: &str| {
        Component::new(
            id,
            format!("{manufacturer} {model}"),
            ComponentType::HddSasSata,
            manufacturer,
            model,
        )
        .with_attributes(attrs(&[
            ("capacity", capacity[0], Some(capacity[1])),
            ("interface", "SATA", None),
            ("speed", "7200", Some("RPM")),
            ("form_factor", "3.5", None),
            ("cache", cache, Some("MB")),
        ]))
    };
    vec![
        disk("seagate_500gb_sata", "Seagate", "500GB SATA", ["500", "GB"], "16")
            .with_price(Price::from_units(60)),
        disk("wd_1tb_sata", "Western Digital", "1TB SATA", ["1", "TB"], "64")
            .with_price(Price::from_units(100)),
    ]
}

fn psu(id: &str, manufacturer: &str, watts: &str, efficiency: &str, price: u64) -> Component {
    Component::new(
        id,
        format!("{manufacturer} {watts}W Power Supply"),
        ComponentType::PowerSupply,
        manufacturer,
        format!("{watts}W PSU"),
    )
    .with_attributes(attrs(&[
        ("power", watts, Some("W")),
        ("efficiency", efficiency, None),
        ("form_factor", "Standard", None),
        ("modular", "No", None),
    ]))
    .with_price(Price::from_units(price))
}

fn power_supplies() -> Vec<Component> {
    vec![
        psu("hp_460w_psu", "HP", "460", "80+", 120),
        psu("dell_750w_psu", "Dell", "750", "80+ Gold", 180),
    ]
}

fn extended_additions() -> Vec<Component> {
    vec![
        Component::new(
            "ibm_x3650_m3",
            "IBM System x3650 M3",
            ComponentType::Server,
            "IBM",
            "x3650 M3",
        )
        .with_attributes(attrs(&[
            ("form_factor", "2U Rack", None),
            ("max_processors", "2", None),
            ("max_memory_slots", "18", None),
            ("max_memory_gb", "192", Some("GB")),
            ("storage_bays", "8", None),
            ("power_supply_slots", "2", None),
            ("socket_type", "Socket 1366", None),
            ("chipset", "Intel 5520", None),
        ]))
        .with_price(Price::from_units(2500))
        .with_description("High-performance rack server for critical workloads"),
        processor(
            "intel_xeon_x5670",
            "Intel Xeon X5670",
            "X5670",
            ["2.93", "6", "1366", "12", "95"],
            450,
        )
        .with_description("Top-tier six-core processor"),
        dimm(
            "crucial_8gb_ddr3_1600",
            "Crucial",
            "8GB DDR3-1600",
            ["8", "DDR3", "1600", "1.5"],
            150,
        )
        .with_description("High-capacity DDR3 module"),
        Component::new(
            "intel_ssd_240gb",
            "Intel SSD 240GB SATA",
            ComponentType::Ssd,
            "Intel",
            "240GB SSD",
        )
        .with_attributes(attrs(&[
            ("capacity", "240", Some("GB")),
            ("interface", "SATA 3.0", None),
            ("type", "SSD", None),
            ("form_factor", "2.5", None),
            ("read_speed", "550", Some("MB/s")),
        ]))
        .with_price(Price::from_units(180))
        .with_description("Fast solid state drive"),
        psu("ibm_835w_psu", "IBM", "835", "80+ Platinum", 220)
            .with_description("High-efficiency power supply for IBM servers"),
    ]
}

// =============================================================================
// DATASETS
// =============================================================================

/// The standard sample inventory.
pub fn standard() -> Result<Inventory, ConfiguratorError> {
    let catalog = catalog(
        [
            servers(),
            processors(),
            memory(),
            disks(),
            power_supplies(),
        ]
        .concat(),
    )?;

    let compatibility = table(&[
        (
            "hp_ml350g4p",
            &[
                "intel_xeon_3_0_604",
                "intel_xeon_3_2_604",
                "kingston_1gb_ddr2_400",
                "corsair_2gb_ddr2_533",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "hp_460w_psu",
            ],
        ),
        (
            "dell_poweredge_r710",
            &[
                "intel_xeon_e5620",
                "samsung_4gb_ddr3_1333",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "dell_750w_psu",
            ],
        ),
        (
            "intel_xeon_3_0_604",
            &[
                "hp_ml350g4p",
                "intel_xeon_3_2_604",
                "kingston_1gb_ddr2_400",
                "corsair_2gb_ddr2_533",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "hp_460w_psu",
            ],
        ),
        (
            "intel_xeon_3_2_604",
            &[
                "hp_ml350g4p",
                "intel_xeon_3_0_604",
                "kingston_1gb_ddr2_400",
                "corsair_2gb_ddr2_533",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "hp_460w_psu",
            ],
        ),
        (
            "intel_xeon_e5620",
            &[
                "dell_poweredge_r710",
                "samsung_4gb_ddr3_1333",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "dell_750w_psu",
            ],
        ),
        (
            "kingston_1gb_ddr2_400",
            &[
                "hp_ml350g4p",
                "intel_xeon_3_0_604",
                "intel_xeon_3_2_604",
                "corsair_2gb_ddr2_533",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "hp_460w_psu",
            ],
        ),
        (
            "corsair_2gb_ddr2_533",
            &[
                "hp_ml350g4p",
                "intel_xeon_3_0_604",
                "intel_xeon_3_2_604",
                "kingston_1gb_ddr2_400",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "hp_460w_psu",
            ],
        ),
        (
            "samsung_4gb_ddr3_1333",
            &[
                "dell_poweredge_r710",
                "intel_xeon_e5620",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "dell_750w_psu",
            ],
        ),
        (
            "seagate_500gb_sata",
            &[
                "hp_ml350g4p",
                "dell_poweredge_r710",
                "intel_xeon_3_0_604",
                "intel_xeon_3_2_604",
                "intel_xeon_e5620",
                "kingston_1gb_ddr2_400",
                "corsair_2gb_ddr2_533",
                "samsung_4gb_ddr3_1333",
                "wd_1tb_sata",
                "hp_460w_psu",
                "dell_750w_psu",
            ],
        ),
        (
            "wd_1tb_sata",
            &[
                "hp_ml350g4p",
                "dell_poweredge_r710",
                "intel_xeon_3_0_604",
                "intel_xeon_3_2_604",
                "intel_xeon_e5620",
                "kingston_1gb_ddr2_400",
                "corsair_2gb_ddr2_533",
                "samsung_4gb_ddr3_1333",
                "seagate_500gb_sata",
                "hp_460w_psu",
                "dell_750w_psu",
            ],
        ),
        (
            "hp_460w_psu",
            &[
                "hp_ml350g4p",
                "intel_xeon_3_0_604",
                "intel_xeon_3_2_604",
                "kingston_1gb_ddr2_400",
                "corsair_2gb_ddr2_533",
                "seagate_500gb_sata",
                "wd_1tb_sata",
            ],
        ),
        (
            "dell_750w_psu",
            &[
                "dell_poweredge_r710",
                "intel_xeon_e5620",
                "samsung_4gb_ddr3_1333",
                "seagate_500gb_sata",
                "wd_1tb_sata",
            ],
        ),
    ]);

    let rules: RuleSet = [
        Rule::excluded("socket_604_compatibility", "hp_ml350g4p", "intel_xeon_e5620")
            .with_condition("Socket 604 vs Socket 1366"),
        Rule::excluded(
            "socket_1366_compatibility",
            "dell_poweredge_r710",
            "intel_xeon_3_0_604",
        )
        .with_condition("Socket 1366 vs Socket 604"),
        Rule::excluded(
            "ddr2_ddr3_incompatible",
            "kingston_1gb_ddr2_400",
            "samsung_4gb_ddr3_1333",
        )
        .with_condition("DDR2 and DDR3 cannot be mixed"),
        Rule::excluded(
            "ddr2_ddr3_incompatible_reverse",
            "samsung_4gb_ddr3_1333",
            "kingston_1gb_ddr2_400",
        )
        .with_condition("DDR3 and DDR2 cannot be mixed"),
        Rule::limited("max_processors_hp", "intel_xeon_3_0_604", None, Some(2))
            .with_condition("HP ML350 G4p supports max 2 processors"),
        Rule::limited("max_memory_slots_hp", "kingston_1gb_ddr2_400", None, Some(8))
            .with_condition("HP ML350 G4p has 8 memory slots"),
        Rule::limited("max_memory_slots_dell", "samsung_4gb_ddr3_1333", None, Some(18))
            .with_condition("Dell R710 has 18 memory slots"),
    ]
    .into_iter()
    .collect();

    Ok(Inventory::new(catalog, compatibility, rules))
}

/// The extended sample inventory.
pub fn extended() -> Result<Inventory, ConfiguratorError> {
    let catalog = catalog(
        [
            servers(),
            processors(),
            memory(),
            disks(),
            power_supplies(),
            extended_additions(),
        ]
        .concat(),
    )?;

    let compatibility = table(&[
        (
            "hp_ml350g4p",
            &[
                "intel_xeon_3_0_604",
                "intel_xeon_3_2_604",
                "kingston_1gb_ddr2_400",
                "corsair_2gb_ddr2_533",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "intel_ssd_240gb",
                "hp_460w_psu",
            ],
        ),
        (
            "dell_poweredge_r710",
            &[
                "intel_xeon_e5620",
                "intel_xeon_x5670",
                "samsung_4gb_ddr3_1333",
                "crucial_8gb_ddr3_1600",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "intel_ssd_240gb",
                "dell_750w_psu",
            ],
        ),
        (
            "ibm_x3650_m3",
            &[
                "intel_xeon_e5620",
                "intel_xeon_x5670",
                "samsung_4gb_ddr3_1333",
                "crucial_8gb_ddr3_1600",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "intel_ssd_240gb",
                "ibm_835w_psu",
            ],
        ),
        (
            "intel_xeon_3_0_604",
            &[
                "hp_ml350g4p",
                "intel_xeon_3_2_604",
                "kingston_1gb_ddr2_400",
                "corsair_2gb_ddr2_533",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "intel_ssd_240gb",
                "hp_460w_psu",
            ],
        ),
        (
            "intel_xeon_3_2_604",
            &[
                "hp_ml350g4p",
                "intel_xeon_3_0_604",
                "kingston_1gb_ddr2_400",
                "corsair_2gb_ddr2_533",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "intel_ssd_240gb",
                "hp_460w_psu",
            ],
        ),
        (
            "intel_xeon_e5620",
            &[
                "dell_poweredge_r710",
                "ibm_x3650_m3",
                "intel_xeon_x5670",
                "samsung_4gb_ddr3_1333",
                "crucial_8gb_ddr3_1600",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "intel_ssd_240gb",
                "dell_750w_psu",
                "ibm_835w_psu",
            ],
        ),
        (
            "intel_xeon_x5670",
            &[
                "dell_poweredge_r710",
                "ibm_x3650_m3",
                "intel_xeon_e5620",
                "samsung_4gb_ddr3_1333",
                "crucial_8gb_ddr3_1600",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "intel_ssd_240gb",
                "dell_750w_psu",
                "ibm_835w_psu",
            ],
        ),
        (
            "kingston_1gb_ddr2_400",
            &[
                "hp_ml350g4p",
                "intel_xeon_3_0_604",
                "intel_xeon_3_2_604",
                "corsair_2gb_ddr2_533",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "intel_ssd_240gb",
                "hp_460w_psu",
            ],
        ),
        (
            "corsair_2gb_ddr2_533",
            &[
                "hp_ml350g4p",
                "intel_xeon_3_0_604",
                "intel_xeon_3_2_604",
                "kingston_1gb_ddr2_400",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "intel_ssd_240gb",
                "hp_460w_psu",
            ],
        ),
        (
            "samsung_4gb_ddr3_1333",
            &[
                "dell_poweredge_r710",
                "ibm_x3650_m3",
                "intel_xeon_e5620",
                "intel_xeon_x5670",
                "crucial_8gb_ddr3_1600",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "intel_ssd_240gb",
                "dell_750w_psu",
                "ibm_835w_psu",
            ],
        ),
        (
            "crucial_8gb_ddr3_1600",
            &[
                "dell_poweredge_r710",
                "ibm_x3650_m3",
                "intel_xeon_e5620",
                "intel_xeon_x5670",
                "samsung_4gb_ddr3_1333",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "intel_ssd_240gb",
                "dell_750w_psu",
                "ibm_835w_psu",
            ],
        ),
        (
            "seagate_500gb_sata",
            &[
                "hp_ml350g4p",
                "dell_poweredge_r710",
                "ibm_x3650_m3",
                "intel_xeon_3_0_604",
                "intel_xeon_3_2_604",
                "intel_xeon_e5620",
                "intel_xeon_x5670",
                "kingston_1gb_ddr2_400",
                "corsair_2gb_ddr2_533",
                "samsung_4gb_ddr3_1333",
                "crucial_8gb_ddr3_1600",
                "wd_1tb_sata",
                "intel_ssd_240gb",
                "hp_460w_psu",
                "dell_750w_psu",
                "ibm_835w_psu",
            ],
        ),
        (
            "wd_1tb_sata",
            &[
                "hp_ml350g4p",
                "dell_poweredge_r710",
                "ibm_x3650_m3",
                "intel_xeon_3_0_604",
                "intel_xeon_3_2_604",
                "intel_xeon_e5620",
                "intel_xeon_x5670",
                "kingston_1gb_ddr2_400",
                "corsair_2gb_ddr2_533",
                "samsung_4gb_ddr3_1333",
                "crucial_8gb_ddr3_1600",
                "seagate_500gb_sata",
                "intel_ssd_240gb",
                "hp_460w_psu",
                "dell_750w_psu",
                "ibm_835w_psu",
            ],
        ),
        (
            "intel_ssd_240gb",
            &[
                "hp_ml350g4p",
                "dell_poweredge_r710",
                "ibm_x3650_m3",
                "intel_xeon_3_0_604",
                "intel_xeon_3_2_604",
                "intel_xeon_e5620",
                "intel_xeon_x5670",
                "kingston_1gb_ddr2_400",
                "corsair_2gb_ddr2_533",
                "samsung_4gb_ddr3_1333",
                "crucial_8gb_ddr3_1600",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "hp_460w_psu",
                "dell_750w_psu",
                "ibm_835w_psu",
            ],
        ),
        (
            "hp_460w_psu",
            &[
                "hp_ml350g4p",
                "intel_xeon_3_0_604",
                "intel_xeon_3_2_604",
                "kingston_1gb_ddr2_400",
                "corsair_2gb_ddr2_533",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "intel_ssd_240gb",
            ],
        ),
        (
            "dell_750w_psu",
            &[
                "dell_poweredge_r710",
                "intel_xeon_e5620",
                "intel_xeon_x5670",
                "samsung_4gb_ddr3_1333",
                "crucial_8gb_ddr3_1600",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "intel_ssd_240gb",
            ],
        ),
        (
            "ibm_835w_psu",
            &[
                "ibm_x3650_m3",
                "intel_xeon_e5620",
                "intel_xeon_x5670",
                "samsung_4gb_ddr3_1333",
                "crucial_8gb_ddr3_1600",
                "seagate_500gb_sata",
                "wd_1tb_sata",
                "intel_ssd_240gb",
            ],
        ),
    ]);

    let rules: RuleSet = [
        Rule::excluded("socket_604_compatibility", "hp_ml350g4p", "intel_xeon_e5620")
            .with_condition("Socket 604 vs Socket 1366"),
        Rule::excluded(
            "socket_1366_compatibility_hp",
            "hp_ml350g4p",
            "intel_xeon_x5670",
        )
        .with_condition("Socket 604 vs Socket 1366"),
        Rule::excluded(
            "ddr2_ddr3_incompatible_1",
            "kingston_1gb_ddr2_400",
            "samsung_4gb_ddr3_1333",
        )
        .with_condition("DDR2 and DDR3 cannot be mixed"),
        Rule::excluded(
            "ddr2_ddr3_incompatible_2",
            "corsair_2gb_ddr2_533",
            "crucial_8gb_ddr3_1600",
        )
        .with_condition("DDR2 and DDR3 cannot be mixed"),
        Rule::limited("max_processors_2", "intel_xeon_3_0_604", None, Some(2))
            .with_condition("At most 2 processors per server"),
        Rule::limited("max_memory_slots_hp", "kingston_1gb_ddr2_400", None, Some(8))
            .with_condition("HP ML350 G4p has 8 memory slots"),
        Rule::limited("max_memory_slots_dell", "samsung_4gb_ddr3_1333", None, Some(18))
            .with_condition("Dell R710 has 18 memory slots"),
    ]
    .into_iter()
    .collect();

    Ok(Inventory::new(catalog, compatibility, rules))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_dataset_shape() {
        let inv = standard().expect("standard dataset");
        assert_eq!(inv.catalog().len(), 12);
        assert_eq!(inv.compatibility().len(), 12);
        assert_eq!(inv.rules().len(), 7);
        assert_eq!(
            inv.catalog().list_by_type(ComponentType::HddSasSata).len(),
            2
        );
    }

    #[test]
    fn extended_dataset_adds_five_components() {
        let inv = extended().expect("extended dataset");
        assert_eq!(inv.catalog().len(), 17);
        assert_eq!(inv.compatibility().len(), 17);
        assert!(inv.catalog().contains("intel_ssd_240gb"));
        assert_eq!(
            inv.catalog().list_by_type(ComponentType::Ssd).len(),
            1
        );
    }

    #[test]
    fn every_table_entry_names_a_catalog_component() {
        for inv in [standard().expect("standard"), extended().expect("extended")] {
            for id in inv.compatibility().ids() {
                assert!(inv.catalog().contains(id.as_str()), "{id}");
                for other in inv.compatibility().compatible_ids(id.as_str()) {
                    assert!(inv.catalog().contains(other.as_str()), "{id} -> {other}");
                    assert_ne!(id, other, "self-reference in {id}");
                }
            }
        }
    }

    #[test]
    fn platforms_do_not_mix() {
        let inv = standard().expect("standard");
        assert!(!inv
            .compatibility()
            .permits("hp_460w_psu", "dell_poweredge_r710"));
    }
}
