mod common;
mod intake;
mod routing;
