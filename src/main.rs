//! Command line demo for the generators: prints the requested
//! enumeration, one result per line.

use anyhow::{bail, Context};
use combiter::{combinations, counting, permutations, product_repeated};
use itertools::Itertools;

const USAGE: &str = "usage: combiter <command> [options] <item>...

commands:
    product -n <repeat> <item>...        cartesian product of the items
                                         with themselves, <repeat> positions
    permutations [-l <length>] [-r] <item>...
    combinations -l <length> [-r] <item>...

options:
    -l <length>    number of output positions
    -r             allow repeated elements";

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let command = match args.next() {
        Some(command) => command,
        None => bail!("{}", USAGE),
    };
    let (length, repeat, allow_repetition, items) = parse_options(args)?;
    match command.as_str() {
        "product" => {
            let repeat = repeat.context("product needs a repeat count (-n)")?;
            if let Ok(count) = counting::product_count(&vec![items.len(); repeat]) {
                log::info!("{} tuples", count);
            }
            for tuple in product_repeated(items, repeat) {
                println!("{}", tuple.iter().join(" "));
            }
        }
        "permutations" => {
            if let Ok(count) = counting::permutation_count(items.len(), length, allow_repetition) {
                log::info!("{} permutations", count);
            }
            for permutation in permutations(items, length, allow_repetition) {
                println!("{}", permutation.iter().join(" "));
            }
        }
        "combinations" => {
            let length = length.context("combinations need a length (-l)")?;
            if let Ok(count) = counting::combination_count(items.len(), length, allow_repetition) {
                log::info!("{} combinations", count);
            }
            for combination in combinations(items, length, allow_repetition) {
                println!("{}", combination.iter().join(" "));
            }
        }
        other => bail!("unknown command {:?}\n{}", other, USAGE),
    }
    Ok(())
}

/// Splits the remaining arguments into options and items.
fn parse_options(
    mut args: impl Iterator<Item = String>,
) -> anyhow::Result<(Option<usize>, Option<usize>, bool, Vec<String>)> {
    let mut length = None;
    let mut repeat = None;
    let mut allow_repetition = false;
    let mut items = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-l" => {
                let value = args.next().context("-l needs a value")?;
                length = Some(value.parse().context("-l value must be an integer")?);
            }
            "-n" => {
                let value = args.next().context("-n needs a value")?;
                repeat = Some(value.parse().context("-n value must be an integer")?);
            }
            "-r" => allow_repetition = true,
            _ => items.push(arg),
        }
    }
    Ok((length, repeat, allow_repetition, items))
}
