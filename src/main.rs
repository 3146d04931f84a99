fn main() {
    raitobokkusu::run();
}
