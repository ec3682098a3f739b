fn main() {
    assetflow_frontend::launch();
}
