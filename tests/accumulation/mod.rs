mod iter;
mod tuple;
