fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    skirmish_cui::run_with_args(&args)
}
