mod probe;
mod wait;
