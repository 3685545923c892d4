/// Single tanh well: 0 far above `center`, `depth` far below.
fn well(z: f64, depth: f64, width: f64, center: f64) -> f64 {
    -0.5 * depth * (((z - center) / width).tanh() - 1.0)
}

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Sensor ramp: 0 → 40 nm in 0.01 nm steps (4000 samples).
    let n = 4000;
    let step_nm = 0.01;

    // Two unbinding wells along the retraction, in nm.
    let wells = [(3.0, 0.6, 12.0), (5.5, 0.8, 27.0)];

    let output_path = "sample_trace.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["zSensr", "defl"])
        .expect("Failed to write CSV header");

    for i in 0..n {
        let z_nm = i as f64 * step_nm;
        let tsd_nm: f64 = -0.85 * z_nm
            + wells
                .iter()
                .map(|&(depth, width, center)| well(z_nm, depth, width, center))
                .sum::<f64>()
            + rng.gauss(0.0, 0.05);

        // The loader derives tsd = defl - zSensr, so emit defl = z + tsd.
        let z_m = z_nm * 1e-9;
        let defl_m = (z_nm + tsd_nm) * 1e-9;
        writer
            .write_record(&[z_m.to_string(), defl_m.to_string()])
            .expect("Failed to write CSV row");
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {n} samples to {output_path}");
}
