fn main() -> anyhow::Result<()> {
    mission_shipper::cli::run_cli()
}
