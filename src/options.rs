use rand::{SeedableRng, rngs::StdRng};
use sqlife::{Grid, GridError, Pattern};
use thiserror::Error;

const DEFAULT_SIZE: usize = 3;
const DEFAULT_GENS: usize = 5;
const BLINKER: &str = "010/010/010";

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error(transparent)]
    Getopts(#[from] getopts::Fail),
    #[error("invalid value {value:?} for --{name}")]
    InvalidValue { name: &'static str, value: String },
    #[error("unknown fill mode {0:?}, expected random, alternating, all or empty")]
    InvalidFill(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl From<OptionsError> for std::io::Error {
    fn from(err: OptionsError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}

pub struct Args {
    matches: getopts::Matches,
    empty: bool,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, OptionsError> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optopt("n", "size", "side length of a generated grid", "N");
        opts.optopt("g", "gens", "number of generations to run", "COUNT");
        opts.optopt("f", "fill", "set fill type", "TYPE");
        opts.optopt("s", "seed", "seed for the random fill", "SEED");
        opts.optopt(
            "p",
            "pattern",
            "starting grid as rows of 0/1 separated by '/'",
            "ROWS",
        );

        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: sqlife [options]"));
            Ok(None)
        } else {
            Ok(Some(Self {
                matches,
                empty: args.is_empty(),
            }))
        }
    }
    pub fn from_env() -> Result<Option<Self>, OptionsError> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn number<N: std::str::FromStr>(&self, name: &'static str) -> Result<Option<N>, OptionsError> {
        match self.matches.opt_str(name) {
            Some(value) => match value.parse() {
                Ok(n) => Ok(Some(n)),
                Err(_) => Err(OptionsError::InvalidValue { name, value }),
            },
            None => Ok(None),
        }
    }

    pub fn size(&self) -> Result<usize, OptionsError> {
        Ok(self.number("size")?.unwrap_or(DEFAULT_SIZE))
    }
    pub fn generations(&self) -> Result<usize, OptionsError> {
        Ok(self.number("gens")?.unwrap_or(DEFAULT_GENS))
    }
    pub fn seed(&self) -> Result<Option<u64>, OptionsError> {
        self.number("seed")
    }
    pub fn fill_mode(&self) -> Result<FillMode, OptionsError> {
        let mode_str = self.matches.opt_str("fill");
        let mode_str = mode_str.as_deref().unwrap_or("random");
        FillMode::new(mode_str).ok_or_else(|| OptionsError::InvalidFill(mode_str.to_owned()))
    }
    pub fn pattern(&self) -> Result<Option<Pattern>, OptionsError> {
        match self.matches.opt_str("pattern") {
            Some(value) => Ok(Some(Pattern::parse(&value)?)),
            None => Ok(None),
        }
    }

    fn rng(&self) -> Result<StdRng, OptionsError> {
        Ok(match self.seed()? {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        })
    }

    /// The starting grids to run, in order
    ///
    /// Without any arguments this is the blinker followed by a random 3x3 grid.
    pub fn scenarios(&self) -> Result<Vec<Scenario>, OptionsError> {
        let generations = self.generations()?;
        let mut rng = self.rng()?;

        if self.empty {
            let blinker = Pattern::parse(BLINKER)?.to_grid()?;
            let random = Grid::random(DEFAULT_SIZE, &mut rng)?;
            return Ok(vec![
                Scenario::new("", blinker, generations),
                Scenario::new("Random", random, generations),
            ]);
        }

        let scenario = match self.pattern()? {
            Some(pattern) => Scenario::new("Pattern", pattern.to_grid()?, generations),
            None => {
                let mode = self.fill_mode()?;
                let grid = mode.create_grid(self.size()?, &mut rng)?;
                Scenario::new(mode.name(), grid, generations)
            }
        };
        Ok(vec![scenario])
    }
}

/// A named starting grid and how long to run it
pub struct Scenario {
    pub name: &'static str,
    pub grid: Grid,
    pub generations: usize,
}
impl Scenario {
    pub fn new(name: &'static str, grid: Grid, generations: usize) -> Self {
        Self {
            name,
            grid,
            generations,
        }
    }

    /// The announcement printed before the scenario runs
    pub fn title(&self) -> String {
        if self.name.is_empty() {
            "The Game being played for Scenario: ".to_owned()
        } else {
            format!("The Game being played for {} Scenario: ", self.name)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Alternating => "Alternating",
            Self::All => "Full",
            Self::Empty => "Empty",
        }
    }

    pub fn create_grid<R: rand::Rng>(self, side: usize, rng: &mut R) -> Result<Grid, GridError> {
        match self {
            Self::Random => Grid::random(side, rng),
            Self::Alternating => Grid::from_fn(side, |pos| (pos.row + pos.col) % 2 == 0),
            Self::All => Grid::from_fn(side, |_| true),
            Self::Empty => Grid::from_fn(side, |_| false),
        }
    }
}
