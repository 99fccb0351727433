fn main() {
    item_price_tracker::launch();
}
