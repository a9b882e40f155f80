use aura_index::{AqiBand, BreakpointTable};

#[test]
fn reference_fixtures() {
    let table = BreakpointTable::pm25();

    // (concentration, index, label) rows checked against the published
    // EPA scale.
    let cases = [
        (0.0, 0, "Good"),
        (5.0, 20, "Good"),
        (12.0, 50, "Good"),
        (20.0, 67, "Moderate"),
        (35.4, 100, "Moderate"),
        (45.0, 124, "Unhealthy for Sensitive Groups"),
        (55.4, 150, "Unhealthy for Sensitive Groups"),
        (100.0, 196, "Unhealthy"),
        (150.4, 200, "Unhealthy"),
        (200.0, 249, "Very Unhealthy"),
        (250.4, 300, "Very Unhealthy"),
        (300.0, 349, "Hazardous"),
        (350.4, 400, "Hazardous"),
        (450.0, 466, "Hazardous"),
        (500.4, 500, "Hazardous"),
        (600.0, 500, "Hazardous"),
    ];

    for (conc, index, label) in cases {
        let got = table.compute(conc).unwrap();
        assert_eq!(got, index, "concentration {conc}");
        assert_eq!(
            AqiBand::from_index(got).label(),
            label,
            "concentration {conc}"
        );
    }
}

#[test]
fn monotonic_over_sampled_grid() {
    let table = BreakpointTable::pm25();
    let mut prev = 0;
    for i in 0..=12_000 {
        let x = f64::from(i) * 0.05; // 0.0 ..= 600.0
        let aqi = table.compute(x).unwrap();
        assert!(
            aqi >= prev,
            "index decreased at concentration {x}: {aqi} < {prev}"
        );
        prev = aqi;
    }
}

#[test]
fn output_stays_on_scale() {
    let table = BreakpointTable::pm25();
    for i in 0..=2_000 {
        let x = f64::from(i) * 0.5;
        let aqi = table.compute(x).unwrap();
        assert!(aqi <= 500, "index {aqi} out of range at concentration {x}");
    }
}

#[test]
fn every_band_is_reachable() {
    let table = BreakpointTable::pm25();
    let concentrations = [5.0, 20.0, 45.0, 100.0, 200.0, 400.0];
    for (conc, expected) in concentrations.iter().zip(AqiBand::ALL) {
        let band = AqiBand::from_index(table.compute(*conc).unwrap());
        assert_eq!(band, expected, "concentration {conc}");
    }
}
