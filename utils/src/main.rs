mod ranges;
mod sum;

use structopt::StructOpt;

#[derive(StructOpt)]
pub enum Options {
    Sum(sum::SumOptions),
    Ranges(ranges::RangesOptions),
}

fn main() -> anyhow::Result<()> {
    match Options::from_args() {
        Options::Sum(options) => options.run(),
        Options::Ranges(options) => options.run(),
    }
}
