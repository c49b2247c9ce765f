pub enum KeyHandlerResult {
    NotHandled,
    Handled,
    ShouldQuit,
}
