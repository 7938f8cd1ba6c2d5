//! Comparison of function values with reference digits.

use transdec::Context;
use transdec::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

// (argument, expected value) pairs for a single argument function.
fn check_fun<F>(ctx: &Context, f: F, cases: &[(&str, &str)])
where
    F: Fn(&Context, &Decimal) -> Result<Decimal, transdec::Error>,
{
    for (x, expected) in cases {
        let v = f(ctx, &dec(x)).unwrap();
        assert_eq!(v.to_string(), *expected, "argument {}", x);
        assert_eq!(v.scale(), ctx.scale());
    }
}

#[test]
fn reference_values_scale_25() {
    let ctx = Context::with_scale(25).unwrap();
    check_fun(
        &ctx,
        Context::exp,
        &[
            ("0.001", "1.0010005001667083416680558"),
            ("-0.75", "0.4723665527410147071380466"),
            ("3.5", "33.1154519586923137506532494"),
            ("-12.25", "0.0000047851173921290090896"),
            ("57.125", "6442764821818628351474408.6131092474356462345130589"),
            ("-0.000001", "0.9999990000004999998333334"),
            ("250", "3746454614502673260349954812202920145808830754281315919228921310748648754622741231829765091624032687183730723.9729998435680058817332623"),
        ],
    );

    check_fun(
        &ctx,
        Context::log,
        &[
            ("0.001", "-6.9077552789821370520539744"),
            ("1.000001", "0.0000009999995000003333331"),
            ("3.5", "1.2527629684953679956881206"),
            ("0.999", "-0.0010005003335835335001430"),
            ("12345.6789", "9.4210613941918352971219675"),
            ("1e-30", "-69.0775527898213705205397436"),
            ("7", "1.9459101490553133051053527"),
        ],
    );

    check_fun(
        &ctx,
        Context::sin,
        &[
            ("0.001", "0.0009999998333333416666665"),
            ("-0.75", "-0.6816387600233341667332420"),
            ("3.5", "-0.3507832276896198481203688"),
            ("-12.25", "0.3111193549811273225834959"),
            ("1000", "0.8268795405320025602558874"),
            ("3.14159", "0.0000026535897932353484175"),
            ("123456.789", "-0.9986640823434470978675991"),
        ],
    );

    check_fun(
        &ctx,
        Context::cos,
        &[
            ("0.001", "0.9999995000000416666652778"),
            ("-0.75", "0.7316888688738208863118388"),
            ("3.5", "-0.9364566872907963376986576"),
            ("-12.25", "0.9503708470676735175805302"),
            ("1000", "0.5623790762907029910782492"),
            ("1.5707", "0.0000963267947476522285351"),
            ("123456.789", "0.0516725327143997700427859"),
        ],
    );

    check_fun(
        &ctx,
        Context::tan,
        &[
            ("0.001", "0.0010000003333334666667206"),
            ("-0.75", "-0.9315964599440724611652028"),
            ("3.5", "0.3745856401585946663305126"),
            ("-12.25", "0.3273662654331959909797507"),
            ("1000", "1.4703241557027184459802088"),
            ("1.5707", "10381.3274175713946958511789782"),
            ("123456.789", "-19.3267879448290676836975389"),
        ],
    );

    let pow_cases = [
        ("2", "0.5", "1.4142135623730950488016887"),
        ("10", "-3", "0.0010000000000000000000000"),
        ("1.5", "20.25", "3680.0015015409621458954333694"),
        ("0.3", "7", "0.0002187000000000000000000"),
        ("123.456", "2.5", "169348.1684832596518281316303196"),
        ("2", "100", "1267650600228229401496703205376.0000000000000000000000000"),
    ];

    for (b, e, expected) in pow_cases {
        let v = ctx.pow(&dec(b), &dec(e)).unwrap();
        assert_eq!(v.to_string(), expected, "{} ^ {}", b, e);
    }
}

#[test]
fn reference_values_scale_60() {
    let ctx = Context::with_scale(60).unwrap();
    check_fun(
        &ctx,
        Context::exp,
        &[
            ("0.001", "1.001000500166708341668055753993058311563076200580701460228515"),
            ("-0.75", "0.472366552741014707138046550943267912970203579136476682395658"),
            ("3.5", "33.115451958692313750653249350388616292471728226477940988860948"),
            ("-12.25", "0.000004785117392129009089609771019433047616632788052290612016"),
            ("57.125", "6442764821818628351474408.613109247435646234513058922405071132132558835947041284958668"),
            ("-0.000001", "0.999999000000499999833333374999991666668055555357142881944442"),
            ("250", "3746454614502673260349954812202920145808830754281315919228921310748648754622741231829765091624032687183730723.972999843568005881733262347252198623061102396885515462063887"),
        ],
    );

    check_fun(
        &ctx,
        Context::log,
        &[
            ("0.001", "-6.907755278982137052053974364053092622803304465886318928099984"),
            ("1.000001", "0.000000999999500000333333083333533333166666809523684523920635"),
            ("3.5", "1.252762968495367995688120621985003161561584595221605934338710"),
            ("0.999", "-0.001000500333583533500142982254068344960755205250434409250988"),
            ("12345.6789", "9.421061394191835297121967529225747379309275886505310071051778"),
            ("1e-30", "-69.077552789821370520539743640530926228033044658863189280999837"),
            ("7", "1.945910149055313305105352743443179729637084729581861188459390"),
        ],
    );

    check_fun(
        &ctx,
        Context::sin,
        &[
            ("0.001", "0.000999999833333341666666468253971009700151314734808658419005"),
            ("-0.75", "-0.681638760023334166733241952779893935338382394659229909213625"),
            ("3.5", "-0.350783227689619848120368800043635585084981735940583485415755"),
            ("-12.25", "0.311119354981127322583495945129642935072111033091882634396170"),
            ("1000", "0.826879540532002560255887429109218141212724967847788320908123"),
            ("3.14159", "0.000002653589793235348417472629802421145222538699034236019478"),
            ("123456.789", "-0.998664082343447097867599122583143434692221692010408852402538"),
        ],
    );

    check_fun(
        &ctx,
        Context::cos,
        &[
            ("0.001", "0.999999500000041666665277777802579364803791889212896145869856"),
            ("-0.75", "0.731688868873820886311838753000084543840541276050772482507683"),
            ("3.5", "-0.936456687290796337698657626671760463019957765781959251620988"),
            ("-12.25", "0.950370847067673517580530189010369783884003624483153742541335"),
            ("1000", "0.562379076290702991078249226605395968755811821738196917702825"),
            ("1.5707", "0.000096326794747652228535096823231605124118466984216122434476"),
            ("123456.789", "0.051672532714399770042785874438450575104009095942158454390155"),
        ],
    );

    check_fun(
        &ctx,
        Context::tan,
        &[
            ("0.001", "0.001000000333333466666720634942504418034314959774193385492407"),
            ("-0.75", "-0.931596459944072461165202756573936428188691339972218997082376"),
            ("3.5", "0.374585640158594666330512579989147388450882284289259230693023"),
            ("-12.25", "0.327366265433195990979750711905192495528285393420618514408722"),
            ("1000", "1.470324155702718445980208804903918569157483891467111820254557"),
            ("1.5707", "10381.327417571394695851178978154212942708507865004157633090218944"),
            ("123456.789", "-19.326787944829067683697538911566635750059185686418074346916374"),
        ],
    );

    let pow_cases = [
        ("2", "0.5", "1.414213562373095048801688724209698078569671875376948073176680"),
        ("10", "-3", "0.001000000000000000000000000000000000000000000000000000000000"),
        ("1.5", "20.25", "3680.001501540962145895433369362137791103759886050757479833736518"),
        ("0.3", "7", "0.000218700000000000000000000000000000000000000000000000000000"),
        ("123.456", "2.5", "169348.168483259651828131630319593988798219487935530545013840325908"),
        ("2", "100", "1267650600228229401496703205376.000000000000000000000000000000000000000000000000000000000000"),
    ];

    for (b, e, expected) in pow_cases {
        let v = ctx.pow(&dec(b), &dec(e)).unwrap();
        assert_eq!(v.to_string(), expected, "{} ^ {}", b, e);
    }
}

#[test]
fn shared_context() {
    use std::sync::Arc;
    use std::thread;

    let ctx = Arc::new(Context::with_scale(40).unwrap());
    let expected = ctx.cos(&Decimal::from(7)).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ctx = ctx.clone();
            thread::spawn(move || ctx.cos(&Decimal::from(7)).unwrap())
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
