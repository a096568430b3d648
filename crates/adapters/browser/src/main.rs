fn main() {
    techblog_adapter_browser::start();
}
