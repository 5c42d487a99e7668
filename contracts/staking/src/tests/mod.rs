mod emergency;
mod rewards;
mod setup;
