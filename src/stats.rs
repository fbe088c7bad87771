use std::time::Instant;

/// Keeps track of how far a run has progressed
pub trait Recorder {
    type Str: AsRef<str>;

    fn record(&mut self, alive: usize);

    fn report(&self) -> Self::Str;
    fn summary(&self) -> Self::Str;
}

pub struct SimpleRecord {
    gens: usize,
    alive: usize,
    started: Instant,
}
impl SimpleRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            gens: 0,
            alive,
            started: Instant::now(),
        }
    }
}
impl Recorder for SimpleRecord {
    type Str = String;

    fn record(&mut self, alive: usize) {
        self.gens += 1;
        self.alive = alive;
    }

    fn report(&self) -> Self::Str {
        let elapsed = self.started.elapsed().as_secs_f64();
        let gens_per_sec = if elapsed > 0.0 {
            self.gens as f64 / elapsed
        } else {
            0.0
        };
        format!(
            "{:.02}gen/s gens:{}, alive:{}",
            gens_per_sec, self.gens, self.alive
        )
    }

    fn summary(&self) -> Self::Str {
        format!("Game ran {} times!", self.gens)
    }
}
