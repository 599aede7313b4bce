fn main() {
    frisbee_takedown::game::run();
}
