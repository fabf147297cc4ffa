use tracing_subscriber::EnvFilter;

#[rustfmt::skip]
const COSTS: [[i32; 3]; 3] = [
    [9, 2, 7],
    [6, 4, 3],
    [5, 8, 1],
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cost = bitmask_assignment::min_assignment_cost(&COSTS)?;
    println!("Minimum Assignment Cost: {cost}");
    Ok(())
}
