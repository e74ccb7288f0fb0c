use std::io::{self, Write};

use colored::*;

use smartcity::{AdjacencyGraph, Dijkstra, LazyPrim, TopoResult, TopoSort};

/// Prints `label`, reads one trimmed line; `None` means stdin is exhausted
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Re-prompts until a non-empty label is entered
fn read_label(label: &str) -> io::Result<Option<String>> {
    loop {
        match prompt(label)? {
            None => return Ok(None),
            Some(word) if word.is_empty() => continue,
            Some(word) => return Ok(Some(word)),
        }
    }
}

/// Re-prompts until a non-negative number is entered
fn read_number(label: &str) -> io::Result<Option<u64>> {
    loop {
        match prompt(label)? {
            None => return Ok(None),
            Some(word) => match word.parse::<u64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("{}", "Please enter a non-negative whole number.".red()),
            },
        }
    }
}

/// Menu option 1: collect wire connections, print the minimum spanning forest
fn electricity_network() -> io::Result<()> {
    println!("\n{}", "-- Electricity Network (MST) --".bold().cyan());

    let count = match read_number("Enter total number of wire connections: ")? {
        Some(count) => count,
        None => return Ok(()),
    };

    let mut buildings: AdjacencyGraph<String, u64> = AdjacencyGraph::new();
    for _ in 0..count {
        let (b1, b2, len) = match (
            read_label("Building 1: ")?,
            read_label("Building 2: ")?,
            read_number("Wire length: ")?,
        ) {
            (Some(b1), Some(b2), Some(len)) => (b1, b2, len),
            _ => return Ok(()),
        };
        buildings.connect(b1, b2, len);
    }

    let forest = LazyPrim::new().build(&buildings);

    println!("\nTotal cable length required: {}", forest.total_weight);
    println!("Cable should be laid between:");
    for edge in &forest.edges {
        println!("  {} --({})--> {}", edge.parent, edge.weight, edge.child);
    }
    Ok(())
}

/// Menu option 2: collect roads, run Dijkstra and then the topological sort
fn shortest_path() -> io::Result<()> {
    println!("\n{}", "-- Shortest Path (Dijkstra + TopoSort) --".bold().cyan());

    let count = match read_number("Enter number of roads: ")? {
        Some(count) => count,
        None => return Ok(()),
    };

    let mut roads: AdjacencyGraph<String, u64> = AdjacencyGraph::new();
    for _ in 0..count {
        let (c1, c2, len) = match (
            read_label("City 1: ")?,
            read_label("City 2: ")?,
            read_number("Distance: ")?,
        ) {
            (Some(c1), Some(c2), Some(len)) => (c1, c2, len),
            _ => return Ok(()),
        };
        roads.connect(c1, c2, len);
    }

    let (start, end) = match (read_label("\nStart city: ")?, read_label("End city: ")?) {
        (Some(start), Some(end)) => (start, end),
        _ => return Ok(()),
    };

    match Dijkstra::new().compute(&roads, &start) {
        Ok(paths) => match (paths.distance_to(&end), paths.path_to(&end)) {
            (Some(distance), Some(path)) => {
                println!(
                    "\nShortest path from {} to {} = {} units",
                    start, end, distance
                );
                println!("Path: {}", path.join(" -> "));
            }
            _ => println!("No path from {} to {}", start, end),
        },
        Err(_) => println!("No path from {} to {}", start, end),
    }

    match TopoSort::new().sort(&roads) {
        TopoResult::Order(order) => {
            println!("\nTopological Order (if DAG): {}", order.join(" "));
        }
        TopoResult::Cycle => {
            println!("\nGraph has a cycle. Topological Sort not possible.");
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    loop {
        println!("\n{}", "--- MENU ---".bold());
        println!("1. Electricity Network (MST)");
        println!("2. Shortest Path (Dijkstra + TopoSort)");
        println!("3. Exit");

        match prompt("Enter choice: ")? {
            None => {
                println!("Exiting...");
                return Ok(());
            }
            Some(choice) => match choice.as_str() {
                "1" => electricity_network()?,
                "2" => shortest_path()?,
                "3" => {
                    println!("Exiting...");
                    return Ok(());
                }
                _ => println!("{}", "Invalid choice. Try again.".red()),
            },
        }
    }
}
