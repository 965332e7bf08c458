use std::path::PathBuf;

use anyhow::{Context, Result};

const HEADERS: [&str; 5] = ["name", "employer", "location", "position type", "core competency"];

const TITLES: [&str; 8] = [
    "Junior Developer",
    "Software Engineer",
    "Senior Software Engineer",
    "Data Analyst",
    "QA Engineer",
    "Web Developer",
    "Systems Administrator",
    "Mobile Developer",
];

const EMPLOYERS: [&str; 7] = [
    "LaunchCode",
    "Enterprise Holdings, Inc",
    "Cozy",
    "Acme",
    "Acme Labs",
    "Mastercard",
    "\"Big\" Data Co",
];

const LOCATIONS: [&str; 5] = ["Saint Louis", "Kansas City", "Miami", "Remote", "Tampa"];

const POSITION_TYPES: [&str; 6] = [
    "Web - Back End",
    "Web - Front End",
    "Web - Full Stack",
    "Mobile",
    "Data Scientist / Business Intelligence",
    "Embedded",
];

const COMPETENCIES: [&str; 8] = [
    "Java", "Ruby", "Python", "SQL", "JavaScript", "C#", "Rust", "Statistical Analysis",
];

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

    fn pick<'a>(&mut self, choices: &[&'a str]) -> &'a str {
        choices[(self.next_u64() % choices.len() as u64) as usize]
    }
}

/// Usage: `generate_sample [OUTPUT] [ROWS]` (defaults: `job_data.csv`, 200).
fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output_path = PathBuf::from(args.next().unwrap_or_else(|| "job_data.csv".to_string()));
    let rows: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("invalid row count '{n}'"))?,
        None => 200,
    };

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    writer.write_record(HEADERS)?;
    for _ in 0..rows {
        writer.write_record([
            rng.pick(&TITLES),
            rng.pick(&EMPLOYERS),
            rng.pick(&LOCATIONS),
            rng.pick(&POSITION_TYPES),
            rng.pick(&COMPETENCIES),
        ])?;
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {rows} job records to {}", output_path.display());
    Ok(())
}
