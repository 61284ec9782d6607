//! Generate a synthetic `BMW_Car_Sales_Classification.csv` for trying out
//! the dashboard without the real dataset.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, choices: &[&'a str]) -> &'a str {
        choices[(self.next_u64() % choices.len() as u64) as usize]
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let models = [
        "3 Series", "5 Series", "7 Series", "X1", "X3", "X5", "X6", "i3", "i8", "M3", "M5",
    ];
    let regions = [
        "Africa",
        "Asia",
        "Europe",
        "Middle East",
        "North America",
        "South America",
    ];
    let fuel_types = ["Diesel", "Electric", "Hybrid", "Petrol"];
    let transmissions = ["Automatic", "Manual"];
    let colors = ["Black", "Blue", "Grey", "Red", "Silver", "White"];

    // Volumes above this count as a High-selling configuration.
    let high_volume_threshold = 7_000u64;

    let output_path = "BMW_Car_Sales_Classification.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "Year",
            "Region",
            "Model",
            "Fuel_Type",
            "Transmission",
            "Color",
            "Sales_Classification",
            "Sales_Volume",
            "Price_USD",
            "Engine_Size_L",
            "Mileage_KM",
        ])
        .expect("Failed to write header");

    let rows = 5_000;
    for _ in 0..rows {
        let year = 2010 + (rng.next_u64() % 15) as i64;
        let model = rng.pick(&models);
        let fuel_type = rng.pick(&fuel_types);
        let sales_volume = 100 + (rng.next_u64() % 9_900);
        let classification = if sales_volume > high_volume_threshold {
            "High"
        } else {
            "Low"
        };
        let engine_size = if fuel_type == "Electric" {
            0.0
        } else {
            (rng.range(1.5, 5.0) * 10.0).round() / 10.0
        };

        writer
            .write_record([
                year.to_string(),
                rng.pick(&regions).to_string(),
                model.to_string(),
                fuel_type.to_string(),
                rng.pick(&transmissions).to_string(),
                rng.pick(&colors).to_string(),
                classification.to_string(),
                sales_volume.to_string(),
                format!("{:.0}", rng.range(30_000.0, 120_000.0)),
                format!("{engine_size:.1}"),
                format!("{:.0}", rng.range(0.0, 200_000.0)),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} sales records to {output_path}");
}
