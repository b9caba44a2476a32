mod gate;
mod helpers;
mod multi_tab;
mod session;
