mod calculator;
mod help;
mod helpers;
