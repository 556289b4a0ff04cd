
mod regs;
mod sample;
mod scale;
