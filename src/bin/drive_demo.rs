use std::sync::Arc;

use anyhow::Result;
use hermes_core::{
    BusBehavior, Heading, Navigator, Position, SportsCarBehavior, VehicleBehavior,
};

fn main() -> Result<()> {
    env_logger::init();

    println!("Initializing Hermes core...");

    // Default vehicle: built-in command table, no modes active
    let mut navigator = Navigator::new();
    println!("Start: {}", navigator.status());

    navigator.execute_commands("MRM");
    println!("After MRM: {}", navigator.status());

    // Custom starting pose, heading parsed from its symbol
    let heading = Heading::try_from('S')?;
    let mut courier = Navigator::with_pose(Position::new(1, 2), heading);
    courier.execute_commands("MLMRMLMM");
    println!("Courier after MLMRMLMM from (1, 2) facing S: {}", courier.status());

    // Modal driving: accelerate and reverse toggles change what M, L and R do
    let mut modal = Navigator::new();
    modal.execute_commands("FBM");
    println!(
        "Modal vehicle after FBM: {} (accelerating={}, reversing={})",
        modal.status(),
        modal.is_accelerating(),
        modal.is_reversing()
    );

    // Turn-round: TR is one composite command, with a leading step when accelerating
    let mut u_turn = Navigator::new();
    u_turn.execute_commands("FTR");
    println!("U-turn vehicle after FTR: {}", u_turn.status());

    // A behavior overrides movement and turn dispatch entirely
    let sports_car: Arc<dyn VehicleBehavior> = Arc::new(SportsCarBehavior::new());
    let mut rally = Navigator::with_behavior(
        Position::new(0, 0),
        Heading::North,
        Arc::clone(&sports_car),
    );
    println!("Rally vehicle using: {}", rally.behavior_name().unwrap_or("none"));
    rally.execute_commands("MRM");
    println!("Rally vehicle after MRM: {}", rally.status());

    // The same stateless behavior instance can drive a second vehicle
    let mut pace_car = Navigator::with_behavior(
        Position::new(5, 5),
        Heading::East,
        Arc::clone(&sports_car),
    );
    pace_car.execute_commands("M");
    println!("Pace car after M: {}", pace_car.status());

    // Swapping behaviors takes effect on the next command
    rally.set_behavior(Arc::new(BusBehavior::new()));
    println!("Rally vehicle now using: {}", rally.behavior_name().unwrap_or("none"));
    rally.execute_commands("TR");
    println!("Rally vehicle after TR: {}", rally.status());

    // Clearing the behavior restores the built-in command table
    rally.clear_behavior();
    rally.execute_commands("M");
    println!("Rally vehicle back on defaults after M: {}", rally.status());

    println!("Demo complete.");
    Ok(())
}
