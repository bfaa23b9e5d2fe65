//! Plays the agent on a small fixed board with a toy move resolver standing in for the game
//! server, and writes the reward of every turn to stdout as CSV.

use std::{error::Error, io};

use qhero::{
    game::{Board, CellCode, Dir, HeroSnapshot, Pos, TurnSnapshot},
    BotConfig, HeroAgent,
};

const NUM_TURNS: u32 = 200;

const SIZE: usize = 5;
const MAP: &str = concat!(
    "##  $-  ##",
    "    ##    ",
    "[]      $2",
    "    ##    ",
    "##  $-  ##",
);

fn main() -> Result<(), Box<dyn Error>> {
    let mut agent = HeroAgent::from_config(BotConfig {
        seed: Some(42),
        ..Default::default()
    })?;

    let board = Board::parse(SIZE, MAP)?;
    let mut turn = TurnSnapshot::from_json(&format!(
        r#"{{ "game": {{ "board": {{ "size": {SIZE}, "tiles": "{}" }} }},
             "hero": {{ "id": 1, "life": 100, "gold": 0, "pos": {{ "x": 2, "y": 2 }} }} }}"#,
        tiles_with_hero((2, 2))
    ))?;
    agent.start(&turn.hero)?;

    let mut wtr = csv::Writer::from_writer(io::stdout());
    wtr.write_record(["turn", "move", "reward", "states"])?;

    for i in 0..NUM_TURNS {
        let dir = agent.act(&turn);
        let reward = agent
            .arena()
            .reward_for(agent.arena().next_position(dir))
            .unwrap_or(0.0);
        wtr.write_record([
            i.to_string(),
            dir.name().to_string(),
            reward.to_string(),
            agent.learner().state_count().to_string(),
        ])?;

        resolve(&board, &mut turn.hero, dir);
        turn.game.board.tiles = tiles_with_hero(turn.hero.position());
    }

    wtr.flush()?;
    Ok(())
}

fn tiles_with_hero((row, col): Pos) -> String {
    let mut tiles = MAP.to_string();
    let i = (row * SIZE + col) * 2;
    tiles.replace_range(i..i + 2, "@1");
    tiles
}

/// Heroes walk onto empty tiles and bounce off everything else, like the real game does for
/// mines, taverns, and woods
fn resolve(board: &Board, hero: &mut HeroSnapshot, dir: Dir) {
    let (x, y) = dir.apply(hero.position(), board.size());
    if board[(x, y)] == CellCode::EMPTY {
        hero.pos.x = x;
        hero.pos.y = y;
    }
}
