//! Recreational Dive Table Planner
//!
//! Walks the three planning steps on the embedded dive tables: first dive to
//! a pressure group, surface-interval credit, then the repetitive-dive times
//! for the second depth. Also prints the gas-side numbers for the first dive.
//!
//! Run with: `cargo run --example planner`

use dive_rdp_planner::gas::calculate_gas_consumption;
use dive_rdp_planner::mix::{calculate_ead, calculate_mod};
use dive_rdp_planner::ndl::{canonical_depth, group_after_dive, ndl_for_depth};
use dive_rdp_planner::repetitive::repetitive_dive_times;
use dive_rdp_planner::surface::group_after_surface_interval;
use std::io::{self, Write};

fn get_float_input(prompt: &str, default: f32) -> f32 {
    loop {
        print!("{} (default: {}): ", prompt, default);
        io::stdout().flush().unwrap();

        let mut input = String::new();
        io::stdin().read_line(&mut input).unwrap();

        let input = input.trim();
        if input.is_empty() {
            return default;
        }

        match input.parse::<f32>() {
            Ok(value) => return value,
            Err(_) => println!("Invalid input. Please enter a valid number."),
        }
    }
}

fn main() {
    println!("=== Recreational Dive Table Planner ===\n");

    println!("First dive:");
    let first_depth = get_float_input("Depth (m)", 18.0);
    let first_time = get_float_input("Bottom time (minutes)", 40.0);

    let Some(planned_depth) = canonical_depth(first_depth) else {
        println!("⚠️  {}m is beyond this planner's deepest table entry (42m).", first_depth);
        println!("   A dive like this needs technical planning, not a recreational table.");
        return;
    };
    let ndl = ndl_for_depth(first_depth).unwrap();
    println!("Planning as a {:.0}m dive, no-decompression limit {} minutes.", planned_depth, ndl);

    let Some(first_group) = group_after_dive(first_depth, first_time) else {
        println!("⚠️  {} minutes exceeds the {} minute limit at this depth.", first_time, ndl);
        println!("   The dive would carry a decompression obligation. Shorten it.");
        return;
    };
    println!("Pressure group after the first dive: {}\n", first_group);

    print_gas_plan(first_depth, first_time);

    println!("\nSurface interval:");
    let interval = get_float_input("Minutes at the surface", 60.0);
    let surfaced_group = group_after_surface_interval(first_group, interval);
    if surfaced_group < first_group {
        println!("✅ Credit for {} minutes: group {} -> {}\n", interval, first_group, surfaced_group);
    } else {
        println!("Group {} unchanged after {} minutes.\n", first_group, interval);
    }

    println!("Repetitive dive:");
    let second_depth = get_float_input("Depth (m)", 12.0);

    match repetitive_dive_times(surfaced_group, second_depth) {
        Some(times) => {
            println!("Residual nitrogen time: {} minutes", times.rnt);
            println!("Adjusted no-decompression limit: {} minutes", times.andl);
            println!("✅ Longest no-stop bottom time for this dive: {} minutes", times.andl);
        }
        None => match canonical_depth(second_depth) {
            Some(depth) => {
                println!("⚠️  A repetitive dive to {:.0}m is not recommended from group {}.", depth, surfaced_group);
                println!("   Extend the surface interval or plan a shallower dive.");
            }
            None => {
                println!("⚠️  {}m is beyond this planner's deepest table entry (42m).", second_depth);
            }
        },
    }
}

fn print_gas_plan(depth: f32, duration: f32) {
    println!("Gas check for the first dive:");
    let tank = get_float_input("Tank size (litres)", 12.0);
    let start_pressure = get_float_input("Starting pressure (bar)", 200.0);
    let sac = get_float_input("Surface air consumption (L/min)", 18.0);

    match calculate_gas_consumption(sac, tank, duration, depth, start_pressure) {
        Some(consumption) => {
            println!("  Gas needed: {:.0} litres ({:.0} bar)", consumption.gas_needed_liters, consumption.pressure_used_bar);
            if consumption.end_pressure_bar < 50.0 {
                println!("⚠️  Ends at {:.0} bar, inside a 50 bar reserve.", consumption.end_pressure_bar);
            } else {
                println!("  Ends at {:.0} bar.", consumption.end_pressure_bar);
            }
        }
        None => println!("  Skipping gas check, inputs out of range."),
    }

    // a couple of mix numbers people like to sanity-check on the boat
    if let Some(mod_32) = calculate_mod(32.0, 1.4) {
        println!("  For reference, EAN32 at PPO2 1.4: MOD {:.1}m", mod_32);
    }
    if let Some(ead) = calculate_ead(depth, 32.0) {
        println!("  On EAN32 this dive would sit at an equivalent air depth of {:.1}m", ead);
    }
}
