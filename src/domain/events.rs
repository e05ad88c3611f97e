#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    StartPressed,
    StopPressed,
}
