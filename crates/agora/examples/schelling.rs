//! Schelling segregation on a torus.
//!
//! Two groups share a single-occupancy grid. On its turn, an agent with too
//! few like neighbors moves to a random empty cell. The run stops when
//! everyone is content or after a fixed number of ticks.

use std::error::Error;

use agora::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const WIDTH: u32 = 20;
const HEIGHT: u32 = 20;
const DENSITY: f64 = 0.8;
const MINORITY: f64 = 0.3;
const HOMOPHILY: usize = 3;
const MAX_TICKS: u64 = 100;

struct Resident {
    id: AgentId,
    pos: Option<Coord>,
    group: u8,
}

impl Agent for Resident {
    fn unique_id(&self) -> AgentId {
        self.id
    }

    fn pos(&self) -> Option<Coord> {
        self.pos
    }

    fn set_pos(&mut self, pos: Option<Coord>) {
        self.pos = pos;
    }
}

struct Schelling {
    grid: SingleGrid,
    schedule: RandomActivation,
    rng: ChaCha8Rng,
    residents: Vec<Resident>,
    happy: usize,
}

impl Schelling {
    fn new(seed: u64) -> Result<Self, Box<dyn Error>> {
        let config = GridConfig {
            width: WIDTH,
            height: HEIGHT,
            torus: true,
        };
        let mut model = Self {
            grid: config.build_single_grid()?,
            schedule: RandomActivation::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            residents: Vec::new(),
            happy: 0,
        };

        for (x, y) in (0..WIDTH as i32).flat_map(|x| (0..HEIGHT as i32).map(move |y| (x, y))) {
            if !model.rng.random_bool(DENSITY) {
                continue;
            }
            let group = u8::from(model.rng.random_bool(MINORITY));
            let mut resident = Resident {
                id: AgentId(model.residents.len() as u64),
                pos: None,
                group,
            };
            model.grid.position_agent(
                &mut resident,
                Placement::At(x),
                Placement::At(y),
                &mut model.rng,
            )?;
            model.schedule.add(resident.id)?;
            model.residents.push(resident);
        }
        tracing::info!(residents = model.residents.len(), "populated grid");
        Ok(model)
    }

    fn similar_neighbors(&self, resident: &Resident, pos: Coord) -> Result<usize, GridError> {
        Ok(self
            .grid
            .neighbor_iter(pos, Connectivity::Eight)?
            .filter(|id| self.residents[id.0 as usize].group == resident.group)
            .count())
    }
}

impl Model for Schelling {
    type Schedule = RandomActivation;
    type Random = ChaCha8Rng;
    type Error = GridError;

    fn schedule(&self) -> &RandomActivation {
        &self.schedule
    }

    fn schedule_mut(&mut self) -> &mut RandomActivation {
        &mut self.schedule
    }

    fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    fn activate(&mut self, agent: AgentId) -> Result<(), GridError> {
        let idx = agent.0 as usize;
        let Some(pos) = self.residents[idx].pos else {
            return Ok(());
        };
        if self.similar_neighbors(&self.residents[idx], pos)? >= HOMOPHILY {
            self.happy += 1;
            return Ok(());
        }
        let resident = &mut self.residents[idx];
        self.grid.move_to_empty(resident, &mut self.rng)?;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let mut model = Schelling::new(42)?;
    while model.schedule.steps() < MAX_TICKS {
        model.happy = 0;
        RandomActivation::step(&mut model)?;
        tracing::info!(
            tick = model.schedule.steps(),
            happy = model.happy,
            total = model.schedule.get_agent_count(),
            "tick"
        );
        if model.happy == model.schedule.get_agent_count() {
            break;
        }
    }

    for y in 0..HEIGHT as i32 {
        let line: String = model
            .grid
            .row(y)?
            .map(|cell| match cell {
                Some(id) if model.residents[id.0 as usize].group == 0 => 'o',
                Some(_) => 'x',
                None => '.',
            })
            .collect();
        println!("{line}");
    }
    Ok(())
}
