fn main() {
    hdmonks_lib::run()
}
