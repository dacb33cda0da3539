use balanced_collections::avl_tree::AvlSet;
use balanced_collections::red_black_tree::RedBlackSet;
use balanced_collections::OrderedSet;
use log::{error, info};
use simplelog::{Config, LevelFilter, SimpleLogger};
use std::env;
use std::process;

const DEFAULT_KEY_COUNT: u32 = 7;

fn fill<S>(set: &mut S, key_count: u32)
where
    S: OrderedSet<u32>,
{
    for key in 1..=key_count {
        set.insert(key);
    }
}

fn main() {
    let args = env::args().skip(1).collect::<Vec<String>>();

    let level = match args.get(1) {
        Some(level) => match level.parse::<LevelFilter>() {
            Ok(level) => level,
            Err(_) => {
                eprintln!("invalid log level: {}", level);
                process::exit(2);
            },
        },
        None => LevelFilter::Info,
    };
    if SimpleLogger::init(level, Config::default()).is_err() {
        eprintln!("failed to install logger");
    }

    let key_count = match args.get(0) {
        Some(count) => match count.parse::<u32>() {
            Ok(count) => count,
            Err(_) => {
                error!("invalid key count: {}", count);
                process::exit(2);
            },
        },
        None => DEFAULT_KEY_COUNT,
    };

    info!("inserting keys 1..={} in ascending order", key_count);

    let mut avl = AvlSet::new();
    fill(&mut avl, key_count);
    info!("avl: {} keys, height {}", avl.len(), avl.height());
    println!("AVL tree:");
    print!("{}", avl.render());

    let mut red_black = RedBlackSet::new();
    fill(&mut red_black, key_count);
    info!("red black: {} keys", red_black.len());
    println!("Red-Black tree:");
    print!("{}", red_black.render());
}
