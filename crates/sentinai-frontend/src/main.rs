fn main() {
    sentinai_frontend::main();
}
