use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    algo::QLearner,
    config::BotConfig,
    decay::Schedule,
    env::{Arena, DiscreteActionSpace, Environment},
    error::{ConfigError, Error, Result},
    exploration::{Choice, EpsilonGreedy},
    game::{Dir, HeroSnapshot, TurnSnapshot},
};

/// Mixed into the configured seed so the learner and the move picker draw different streams
const LEARNER_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// A hero that learns which moves pay off while it plays
///
/// Every turn the agent encodes its surroundings, takes the best known move (or a random one
/// while exploring), records where that move leads, and then replays its known transitions to
/// refine its value estimates. The agent owns its environment and learner, so separate agents
/// never share state.
pub struct HeroAgent {
    arena: Arena,
    learner: QLearner,
    exploration: EpsilonGreedy<Schedule>,
    learn_steps: i64,
    turn: u32,
    rng: StdRng,
}

impl HeroAgent {
    /// **Panics** if `config.gamma` is not in the interval `[0,1]`
    pub fn new(config: BotConfig) -> Self {
        let (rng, learner) = match config.seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                QLearner::seeded(config.gamma, seed ^ LEARNER_SEED_SALT),
            ),
            None => (StdRng::from_entropy(), QLearner::new(config.gamma)),
        };

        Self {
            arena: Arena::new(),
            learner,
            exploration: EpsilonGreedy::new(config.exploration),
            learn_steps: config.learn_steps,
            turn: 0,
            rng,
        }
    }

    /// Validate `config` before building the agent
    pub fn from_config(config: BotConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn learner(&self) -> &QLearner {
        &self.learner
    }

    /// Number of turns played in the current episode
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Learn who we are at the start of a game and build the reward table for it
    pub fn start(&mut self, hero: &HeroSnapshot) -> Result<()> {
        info!("starting as {hero}");
        self.arena.update_agent(hero)?;
        self.arena.build_rewards(hero.hero_id()?);
        Ok(())
    }

    /// Forget everything learned so far, for a new game
    pub fn new_episode(&mut self) {
        self.learner.reset();
        self.turn = 0;
    }

    /// Decide on a move for this turn and learn from it
    ///
    /// **Errors** if the snapshot is malformed; nothing is learned in that case
    pub fn play_turn(&mut self, turn: &TurnSnapshot) -> Result<Dir> {
        self.arena.update(&turn.game.board)?;
        self.arena.update_agent(&turn.hero)?;

        let hero = turn.hero.hero_id()?;
        if self.arena.rewards().map(|r| r.hero()) != Some(hero) {
            self.arena.build_rewards(hero);
        }

        let state = self.arena.state();
        let random = self.arena.random_action(&mut self.rng);
        let action = match self.learner.best_action(&state) {
            None => {
                debug!("no value for {state}, moving {random}");
                random
            }
            Some(_)
                if self.exploration.choose(self.turn, &mut self.rng) == Choice::Explore
                    && !self.learner.knows_action(&state, &random.to_string()) =>
            {
                debug!("exploring {random} from {state}");
                random
            }
            Some(best) => {
                let best = Dir::parse(&best)?;
                debug!("best action from {state} is {best}");
                best
            }
        };

        let (next_state, reward) = self.arena.preview(action);
        let reward = reward.unwrap_or_else(|e| {
            debug!("{e}, counting the move as worthless");
            0.0
        });

        self.learner
            .record_transition(state, next_state, reward, Some(action.to_string()));
        self.learner.learn(self.learn_steps);
        self.turn += 1;

        Ok(action)
    }

    /// Like [`play_turn`](HeroAgent::play_turn), but falls back to a random move on error
    pub fn act(&mut self, turn: &TurnSnapshot) -> Dir {
        self.play_turn(turn).unwrap_or_else(|e: Error| {
            warn!("turn {} failed, moving at random: {e}", self.turn);
            Dir::random(&mut self.rng)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        decay::Constant,
        game::{BoardSnapshot, GameSnapshot, HeroPos},
    };

    use super::*;

    fn turn(size: usize, tiles: &str, id: u8, x: usize, y: usize) -> TurnSnapshot {
        TurnSnapshot {
            game: GameSnapshot {
                board: BoardSnapshot {
                    size,
                    tiles: tiles.to_string(),
                },
            },
            hero: HeroSnapshot {
                id,
                life: 100,
                gold: 0,
                pos: HeroPos { x, y },
            },
        }
    }

    fn agent(seed: u64) -> HeroAgent {
        HeroAgent::new(BotConfig {
            seed: Some(seed),
            ..Default::default()
        })
    }

    // ##$-##
    //   @1
    //   ##
    const MINE_NORTH: &str = "##$-##  @1    ##  ";

    #[test]
    fn turn_records_the_observed_transition() {
        let mut agent = agent(1);
        let snapshot = turn(3, MINE_NORTH, 1, 1, 1);
        let state = {
            agent.start(&snapshot.hero).unwrap();
            agent.arena.update(&snapshot.game.board).unwrap();
            agent.arena.state()
        };

        let dir = agent.play_turn(&snapshot).unwrap();
        let edge = agent.learner().edge(&state, &dir.to_string()).unwrap();
        let expected = match dir {
            Dir::North => 100.0,
            Dir::South => -1.0,
            Dir::East | Dir::West => 0.0,
        };
        assert_eq!(edge.reward, expected, "Reward of the tile moved onto");
        assert_eq!(agent.turn(), 1);
        assert!(agent.learner().state_count() >= 2);
    }

    #[test]
    fn learns_to_take_the_mine() {
        let mut agent = agent(2);
        let snapshot = turn(3, MINE_NORTH, 1, 1, 1);
        for _ in 0..300 {
            agent.play_turn(&snapshot).unwrap();
        }

        let state = agent.arena().state();
        for dir in ["n", "s", "e", "w"] {
            assert!(agent.learner().knows_action(&state, &dir.to_string()), "{dir} was tried");
        }
        for _ in 0..5 {
            assert_eq!(agent.play_turn(&snapshot).unwrap(), Dir::North);
        }
    }

    #[test]
    fn blocked_moves_are_worth_nothing() {
        let mut agent = agent(3);
        let snapshot = turn(1, "@1", 1, 0, 0);
        for _ in 0..10 {
            let dir = agent.play_turn(&snapshot).unwrap();
            let state = agent.arena().state();
            let edge = agent.learner().edge(&state, &dir.to_string()).unwrap();
            assert_eq!(edge.reward, 0.0, "Staying on our own tile");
            assert_eq!(edge.next, state, "A 1x1 board has a single state");
        }
    }

    #[test]
    fn reward_table_follows_the_hero() {
        let mut agent = agent(4);
        assert!(agent.arena().rewards().is_none());
        agent.play_turn(&turn(3, MINE_NORTH, 1, 1, 1)).unwrap();
        assert_eq!(agent.arena().rewards().unwrap().hero().get(), 1);
    }

    #[test]
    fn bad_snapshots_still_yield_a_move() {
        let mut agent = agent(5);
        let malformed = turn(3, "##", 1, 0, 0);
        assert!(matches!(
            agent.play_turn(&malformed),
            Err(Error::MalformedBoard { .. })
        ));

        let bad_hero = turn(3, MINE_NORTH, 9, 1, 1);
        assert!(matches!(agent.play_turn(&bad_hero), Err(Error::InvalidHeroId(9))));

        let _ = agent.act(&malformed);
        assert_eq!(agent.turn(), 0, "Nothing was learned");
        assert_eq!(agent.learner().state_count(), 0);
    }

    #[test]
    fn oversized_board_still_yields_a_move() {
        let mut agent = agent(8);
        let huge = turn(1usize << 32, "", 1, 0, 0);
        assert!(matches!(
            agent.play_turn(&huge),
            Err(Error::MalformedBoard { len: 0, .. })
        ));

        let huge = TurnSnapshot::from_json(
            r#"{ "game": { "board": { "size": 4294967296, "tiles": "" } },
                 "hero": { "id": 1, "life": 100, "gold": 0, "pos": { "x": 0, "y": 0 } } }"#,
        )
        .unwrap();
        let _ = agent.act(&huge);
        assert_eq!(agent.turn(), 0, "Nothing was learned");
    }

    #[test]
    fn greedy_agent_repeats_its_best_move() {
        let mut agent = HeroAgent::from_config(BotConfig {
            seed: Some(6),
            exploration: Schedule::Constant(Constant::new(0.0)),
            ..Default::default()
        })
        .unwrap();
        let snapshot = turn(3, MINE_NORTH, 1, 1, 1);
        let first = agent.play_turn(&snapshot).unwrap();
        let state = agent.arena().state();
        let best = agent.learner.best_action(&state).unwrap();
        assert_eq!(best, first.to_string(), "The only valued move");
        assert_eq!(agent.play_turn(&snapshot).unwrap(), first, "Never explores");
    }

    #[test]
    fn new_episode_forgets() {
        let mut agent = agent(7);
        let snapshot = turn(3, MINE_NORTH, 1, 1, 1);
        agent.play_turn(&snapshot).unwrap();
        agent.new_episode();
        assert_eq!(agent.turn(), 0);
        assert_eq!(agent.learner().state_count(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = BotConfig {
            gamma: 2.0,
            ..Default::default()
        };
        assert!(HeroAgent::from_config(config).is_err());
    }
}
