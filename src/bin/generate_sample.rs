use std::path::PathBuf;

use anyhow::{Context, Result};

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Booster generations in flight order: (category, version prefix, success rate, max payload).
const GENERATIONS: [(&str, &str, f64, f64); 5] = [
    ("v1.0", "F9 v1.0  B00", 0.2, 700.0),
    ("v1.1", "F9 v1.1 B10", 0.35, 4500.0),
    ("FT", "F9 FT B10", 0.7, 9600.0),
    ("B4", "F9 B4 B10", 0.55, 6000.0),
    ("B5", "F9 B5 B10", 0.9, 9800.0),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("spacex_launch_dash.csv"));

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record([
        "Unnamed: 0",
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version",
        "Booster Version Category",
    ])?;

    let mut flight = 0usize;

    // A few legacy Falcon 1 rows the dashboard is expected to drop.
    for _ in 0..3 {
        let class = u8::from(rng.next_f64() < 0.4);
        let payload = (rng.next_f64() * 200.0).round();
        writer.write_record(&[
            flight.to_string(),
            (flight + 1).to_string(),
            "Kwajalein".to_string(),
            class.to_string(),
            format!("{payload:.1}"),
            "Falcon 1".to_string(),
            "Falcon 1".to_string(),
        ])?;
        flight += 1;
    }

    for (g, &(category, prefix, success_rate, max_payload)) in GENERATIONS.iter().enumerate() {
        for n in 0..12 {
            let site = rng.pick(&SITES);
            let class = u8::from(rng.next_f64() < success_rate);
            let payload = (rng.next_f64() * max_payload).round();
            let booster = format!("{prefix}{:02}.{}", g * 12 + n + 3, 1 + n % 3);
            writer.write_record(&[
                flight.to_string(),
                (flight + 1).to_string(),
                site.to_string(),
                class.to_string(),
                format!("{payload:.1}"),
                booster,
                category.to_string(),
            ])?;
            flight += 1;
        }
    }

    writer.flush().context("flushing CSV")?;
    log::info!("Wrote {flight} launches to {}", path.display());
    println!("Wrote {flight} launches to {}", path.display());
    Ok(())
}
