use std::error::Error;

use clap::Parser;
use smartnav::{self, Network, Options};

#[derive(Debug, thiserror::Error)]
#[error("no route from {0} to {1}: {2}")]
struct RouteError(String, String, #[source] smartnav::Error);

#[derive(Parser)]
struct Cli {
    /// Id of the start location
    start: i64,

    /// Id of the end location
    end: i64,

    /// Maximum number of locations in the network
    #[arg(long, default_value_t = Options::default().max_locations)]
    max_locations: usize,

    /// Maximum number of directed roads in the network
    #[arg(long, default_value_t = Options::default().max_roads)]
    max_roads: usize,

    /// Don't preload the demo network
    #[arg(long)]
    empty: bool,

    /// List all locations, sorted by name
    #[arg(long)]
    list: bool,

    /// Print network statistics
    #[arg(long)]
    stats: bool,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    let mut net = Network::new(Options {
        max_locations: cli.max_locations,
        max_roads: cli.max_roads,
        ..Options::default()
    });
    if !cli.empty {
        smartnav::demo::load_demo(&mut net)?;
    }

    if cli.list {
        for location in net.locations().sorted_by_name() {
            println!("{:>4}  {}", location.id, location.name);
        }
        println!();
    }

    if cli.stats {
        print_statistics(&net);
    }

    let route = net.compute_shortest_path(cli.start, cli.end).map_err(|e| {
        RouteError(
            net.location_name(cli.start).to_string(),
            net.location_name(cli.end).to_string(),
            e,
        )
    })?;
    let cost = net.estimate_cost(route.total_distance);

    if let Some(description) = net.history().latest() {
        println!("{}", description);
    }
    println!("Fuel:      {:.2} L", cost.fuel_liters);
    println!("Time:      {}h {}m", cost.hours, cost.minutes);
    println!("Fuel cost: ${:.2}", cost.fuel_cost);

    Ok(())
}

fn print_statistics(net: &Network) {
    let s = net.statistics();
    println!("Locations:     {}", s.locations);
    println!("Roads:         {}", s.roads);
    println!("  Normal:        {}", s.normal);
    println!("  Heavy Traffic: {}", s.heavy_traffic);
    println!("  Blocked:       {}", s.blocked);
    println!("  Available:     {}", s.available);
    println!("  Unavailable:   {}", s.unavailable);
    println!("  One-way:       {}", s.one_way);
    println!(
        "  Bidirectional: {} ({} edges)",
        s.bidirectional_roads(),
        s.bidirectional_edges
    );
    println!("Total distance: {} km", s.total_distance);
    if let Some(avg) = s.average_distance {
        println!("Average road:   {:.2} km", avg);
    }
    println!();
}
