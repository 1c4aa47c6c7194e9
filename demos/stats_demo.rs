use chain_hash::HashMap;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    /// Number of distinct keys to insert
    #[arg(short = 'n', long = "entries", default_value_t = 1000)]
    entries: usize,

    /// Initial slot count of the map
    #[arg(short = 's', long = "slots", default_value_t = 20)]
    slots: usize,

    /// Remove every n-th key after filling (0 disables removal)
    #[arg(short = 'r', long = "remove_every", default_value_t = 0)]
    remove_every: usize,
}

fn main() -> Result<(), chain_hash::Error> {
    let args = Args::parse();

    println!(
        "Creating HashMap with {} initial slots, inserting {} entries",
        args.slots, args.entries
    );

    let mut map: HashMap<u64, u64> = HashMap::with_capacity(args.slots)?;

    let mut growths = 0;
    for i in 0..args.entries as u64 {
        let before = map.slot_count();
        map.put(i, i * 2);
        if map.slot_count() != before {
            growths += 1;
        }
    }

    if args.remove_every > 0 {
        let removed = (0..args.entries as u64)
            .step_by(args.remove_every)
            .filter(|k| map.remove(k).is_some())
            .count();
        println!("Removed {} entries", removed);
    }

    println!(
        "Final size: {} entries in {} slots after {} growths",
        map.len(),
        map.slot_count(),
        growths
    );

    map.chain_histogram().print();
    map.debug_stats().print();

    Ok(())
}
