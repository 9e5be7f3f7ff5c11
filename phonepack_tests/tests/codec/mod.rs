mod generate;
mod ordering_laws;
mod round_trip;
