use grover::error::GroverError;
use grover::report::Summary;
use grover::search::{search_multi, search_single, SearchOutcome};

fn print_outcome(database: &[&str], outcome: Result<SearchOutcome, GroverError>) {
    match outcome {
        Ok(out) => {
            let summary = Summary::new(
                out.qubits,
                out.marked.clone(),
                out.iterations,
                &out.counts,
                out.report(database),
            );
            println!("{summary}");
        }
        Err(e) => eprintln!("{e}"),
    }
}

fn main() {
    let database = [
        "Bob", "Eve", "Mallory", "Trent", "Peggy", "Alice", "Victor", "Alice",
    ];
    let target = "Alice";

    println!("--- Single-solution search for '{target}' ---");
    print_outcome(&database, search_single(&database, &target));

    println!("\n--- Multi-solution search for '{target}' ---");
    print_outcome(&database, search_multi(&database, &target));
}
