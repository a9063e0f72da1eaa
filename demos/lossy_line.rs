use rlgc_media::prelude::*;

fn main() -> Result<(), MediaError> {
    // Lossy 50-ish ohm line: 0.5 Ω/m, 280 nH/m, 1 mS/m, 90 pF/m.
    let freq = Frequency::new(0.5, 5.0, 10, FrequencyUnit::GHz)?;
    let line = DistributedCircuit::new(
        Some(freq.clone()),
        Rlgc::new(0.5, 280e-9, 1e-3, 90e-12),
        MediaOptions::default().z0_port(50.0),
    );
    println!("{line}");

    let gamma = line.gamma()?;
    let z0 = line.z0_characteristic()?;
    let s = line.line_s(0.1)?;
    let s21_db = mag_db(s.iter().map(|p| p.s21));
    let s21_deg = phase_deg(s.iter().map(|p| p.s21));
    let zin = line.input_impedance(0.1, C::new(75.0, 0.0))?;

    println!("f(GHz), Re(gamma), Im(gamma), Re(Z0), Im(Z0), S21(dB), S21(deg), Re(Zin 75), Im(Zin 75)");
    for (k, f) in freq.f_scaled().iter().enumerate() {
        println!(
            "{:.3}, {:.6e}, {:.6e}, {:.4}, {:.4}, {:.4}, {:.2}, {:.3}, {:.3}",
            f,
            gamma[k].re,
            gamma[k].im,
            z0[k].re,
            z0[k].im,
            s21_db[k],
            s21_deg[k],
            zin[k].re,
            zin[k].im
        );
    }

    write_csv(&line, std::io::stdout().lock())?;
    Ok(())
}
