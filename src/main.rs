fn main() {
    dreadhold::game::run();
}
